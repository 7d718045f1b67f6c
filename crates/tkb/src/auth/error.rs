//! Error types for request authorization.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::config::ServiceConfig;

const UNAUTHORIZED_MESSAGE: &str = "Bạn cần đăng nhập để xem thời khóa biểu";
const FORBIDDEN_MESSAGE: &str = "Bạn không có quyền xem thời khóa biểu";

/// Reasons a schedule request can be refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No identity header, or the proxy's anonymous placeholder
    #[error("Unauthorized")]
    Unauthorized,

    /// Identity present but not a member of any recognized group
    #[error("Forbidden")]
    Forbidden { user: String, groups: String },
}

impl AccessError {
    pub fn status(&self) -> StatusCode {
        match self {
            AccessError::Unauthorized => StatusCode::UNAUTHORIZED,
            AccessError::Forbidden { .. } => StatusCode::FORBIDDEN,
        }
    }

    /// Renders the error with a message and service details. Forbidden
    /// errors also echo back the caller's user and raw groups.
    pub fn detailed_response(&self, config: &ServiceConfig) -> Response {
        let body = match self {
            AccessError::Unauthorized => json!({
                "error": self.to_string(),
                "message": UNAUTHORIZED_MESSAGE,
                "service": config.service_name,
                "location": config.location,
            }),
            AccessError::Forbidden { user, groups } => json!({
                "error": self.to_string(),
                "message": FORBIDDEN_MESSAGE,
                "user": user,
                "groups": groups,
                "service": config.service_name,
                "location": config.location,
            }),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Minimal rendering: `{"error": ...}` only.
impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
