use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error shape of the HTTP surface: the caller always receives a JSON body
/// `{message, details?}`, never a bare transport error.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Option<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, details)
    }

    /// Propagate an upstream HTTP status when one was received and is valid;
    /// fall back to 500 otherwise.
    pub fn from_upstream_status(
        status: Option<u16>,
        message: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        let status = status
            .and_then(|s| StatusCode::from_u16(s).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, message, details)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
