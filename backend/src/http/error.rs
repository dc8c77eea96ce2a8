//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

/// Failure envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false` for failures
    pub success: bool,
    /// Human-readable error message
    pub message: String,
    /// Optional diagnostic detail (internal errors only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request parameter (empty/non-numeric id, unknown subject)
    BadRequest(String),
    /// Valid request, no matching data
    NotFound(String),
    /// Unexpected fault; the message stays generic, detail goes into
    /// the `error` field
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::new(msg)),
            AppError::Internal(detail) => {
                // Expected client errors never land here; only genuine
                // faults are logged.
                tracing::error!("internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error").with_error(detail),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::InvalidInput(_) | ServiceError::InvalidSubject(_) => {
                AppError::BadRequest(err.to_string())
            }
            ServiceError::NotFound(_) => AppError::NotFound(err.to_string()),
            ServiceError::Repository(e) => AppError::Internal(e.to_string()),
        }
    }
}
