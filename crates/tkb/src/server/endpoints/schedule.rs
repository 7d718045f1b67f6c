use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::RequestContext;
use crate::server::util::timestamp;
use crate::types::AppState;

const METADATA_MESSAGE: &str = "🌏 Dữ liệu được xử lý từ AWS Cloud qua WireGuard VPN!";

/// GET /api/tkb
/// Returns the caller's whole weekly schedule, chosen by role
pub async fn get_schedule(
    State(s): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    let (user, role) = match ctx.authorize(&s.role_rules) {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!("GET /api/tkb refused for {}: {}", ctx.user_label(), e);
            return e.detailed_response(&s.config);
        }
    };

    info!("GET /api/tkb - {} as {}", user, role);

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "user": user,
            "role": role,
            "schedule": s.timetable.for_role(role),
            "metadata": {
                "service": s.config.service_name,
                "version": s.config.version,
                "location": s.config.location_with_region(),
                "node": s.config.node,
                "timestamp": timestamp(),
                "message": METADATA_MESSAGE,
            }
        })),
    )
        .into_response()
}

/// GET /api/tkb/:day
/// Returns the caller's sessions for one day; unknown days are empty
pub async fn get_day_schedule(
    Path(day): Path<String>,
    State(s): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    let (user, role) = match ctx.authorize(&s.role_rules) {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!("GET /api/tkb/{} refused for {}: {}", day, ctx.user_label(), e);
            return e.into_response();
        }
    };

    info!("GET /api/tkb/{} - {} as {}", day, user, role);

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "user": user,
            "day": day,
            "schedule": s.timetable.sessions_on(role, &day),
            "metadata": {
                "service": s.config.service_name,
                "location": s.config.location,
            }
        })),
    )
        .into_response()
}
