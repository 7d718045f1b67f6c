use axum::{extract::Request, middleware::Next, response::Response};

use crate::auth::RequestContext;

/// Extracts the proxy-forwarded identity into a [`RequestContext`] request
/// extension. Never rejects: authorization is left to the handlers.
///
/// This is the trust boundary. Swapping it for real token verification only
/// requires producing the same extension.
pub async fn extract_identity(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::from_headers(req.headers());
    req.extensions_mut().insert(ctx);
    next.run(req).await
}
