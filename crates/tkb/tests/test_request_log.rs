//! Checks the per-request log line carries structured fields.

use std::io;
use std::sync::{Arc, Mutex};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

use tkb::config::ServiceConfig;
use tkb::create_router;
use tkb::schedule::Timetable;
use tkb::types::AppState;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

async fn logged(req: Request<Body>) -> String {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = create_router(Arc::new(AppState::new(
        ServiceConfig::default(),
        Timetable::builtin(),
    )));
    app.oneshot(req).await.unwrap();

    buf.contents()
}

#[tokio::test]
async fn test_request_line_has_identity_fields() {
    let req = Request::builder()
        .uri("/health")
        .header("x-forwarded-user", "alice")
        .header("x-forwarded-groups", "sinhvien")
        .body(Body::empty())
        .unwrap();

    let out = logged(req).await;
    let line = out.lines().find(|l| l.contains("request")).unwrap();
    assert!(line.contains("method=GET"), "{line}");
    assert!(line.contains("path=\"/health\"") || line.contains("path=/health"), "{line}");
    assert!(line.contains("user=\"alice\"") || line.contains("user=alice"), "{line}");
    assert!(line.contains("groups=\"sinhvien\"") || line.contains("groups=sinhvien"), "{line}");
}

#[tokio::test]
async fn test_request_line_without_identity() {
    let req = Request::builder().uri("/api/tkb").body(Body::empty()).unwrap();

    let out = logged(req).await;
    let line = out.lines().find(|l| l.contains("request")).unwrap();
    assert!(line.contains("anonymous"), "{line}");
    assert!(line.contains("none"), "{line}");
}
