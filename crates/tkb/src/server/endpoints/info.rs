use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::types::AppState;

/// GET /api/tkb/info
/// Static description of the service and its deployment
pub async fn get_info(State(s): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "service": "Thời Khóa Biểu Microservice",
            "version": s.config.version,
            "description": "Microservice quản lý thời khóa biểu - Deployed trên AWS Cloud",
            "endpoints": [
                "GET /api/tkb - Lấy toàn bộ TKB theo role",
                "GET /api/tkb/:day - Lấy TKB theo ngày (Thứ 2, Thứ 3, ...)",
                "GET /health - Health check"
            ],
            "architecture": {
                "deployment": s.config.location_with_region(),
                "node": "aws-worker-1",
                "connection": "WireGuard VPN to OpenStack",
                "authentication": "OAuth2-Proxy + Keycloak (OpenStack)",
                "service_mesh": "Istio"
            }
        })),
    )
}
