use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

use crate::auth::RequestContext;

/// Logs method, path and caller identity for every request.
pub async fn log_request(req: Request, next: Next) -> Response {
    let ctx = req
        .extensions()
        .get::<RequestContext>()
        .cloned()
        .unwrap_or_else(|| RequestContext::from_headers(req.headers()));

    info!(
        method = %req.method(),
        path = req.uri().path(),
        user = ctx.user_label(),
        groups = ctx.groups_label(),
        "request"
    );

    next.run(req).await
}
