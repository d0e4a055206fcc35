use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// JSON error body: `{"error": <title>, "detail": <message or null>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        // Driver and SQL details stay in the log
        error!(err = %e, "storage operation failed");
        JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
    }
}

/// Body rejections keep axum's status: 422 for shape errors, 400 for bad JSON, 415 for content type.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let title = if status == StatusCode::UNPROCESSABLE_ENTITY { "Validation Error" } else { "Bad Request" };
        warn!(%status, detail = %rejection.body_text(), "request body rejected");
        JsonApiError::new(status, title, Some(rejection.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("runtime check failed: {0}")]
    Runtime(String),
}
