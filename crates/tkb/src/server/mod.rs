use std::sync::Arc;

use axum::routing::get;
use axum::{middleware as mw, Router};

use crate::server::endpoints::{info, schedule, status};
use crate::server::middleware::*;
use crate::types::AppState;

mod endpoints;
mod middleware;
mod util;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Static segments win over captures, so `/api/tkb/info` never reaches
    // the per-day handler.
    let tkb_router = Router::new()
        .route("/api/tkb", get(schedule::get_schedule))
        .route("/api/tkb/info", get(info::get_info))
        .route("/api/tkb/:day", get(schedule::get_day_schedule));

    Router::new()
        .route("/health", get(status::get_health))
        .merge(tkb_router)
        .with_state(app_state)
        // The last layer added runs first: identity is extracted before logging.
        .layer(mw::from_fn(request_logger::log_request))
        .layer(mw::from_fn(identity::extract_identity))
}
