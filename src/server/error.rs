use crate::core::PipelineError;
use axum::http::StatusCode;
use serde::Serialize;

/// Error reply: a status plus the `{"error": ...}` body.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody<'a> {
    pub error: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn body(&self) -> ApiErrorBody<'_> {
        ApiErrorBody {
            error: &self.message,
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        if let PipelineError::Search(e) = &err {
            tracing::warn!("Search fetch failed: {}", e);
        }
        ApiError::bad_request(err.to_string())
    }
}
