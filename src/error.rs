//! Domain-specific error types for thought-loops

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the analysis service
#[derive(Error, Debug)]
pub enum ThoughtLoopsError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Embedding provider error: {message}")]
    Embedding { message: String },

    #[error("Timeout error: {operation} timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ThoughtLoopsError {
    pub fn validation(message: impl Into<String>) -> Self {
        ThoughtLoopsError::Validation {
            message: message.into(),
        }
    }

    /// HTTP status the transport layer reports for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ThoughtLoopsError::Validation { .. } => StatusCode::BAD_REQUEST,
            ThoughtLoopsError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label sent to clients in place of the full message
    pub fn category(&self) -> &'static str {
        match self {
            ThoughtLoopsError::Validation { .. } => "validation error",
            ThoughtLoopsError::Embedding { .. } => "embedding provider error",
            ThoughtLoopsError::Timeout { .. } => "request timed out",
            ThoughtLoopsError::Internal { .. } => "internal error",
        }
    }
}

impl From<anyhow::Error> for ThoughtLoopsError {
    fn from(err: anyhow::Error) -> Self {
        ThoughtLoopsError::Internal {
            message: err.to_string(),
        }
    }
}

/// Validation failures keep their message; anything else is logged in full and
/// reported to the client by category only.
impl IntoResponse for ThoughtLoopsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("rejected request: {}", self);
        }
        let message = match &self {
            ThoughtLoopsError::Validation { message } => message.clone(),
            other => other.category().to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for thought-loops operations
pub type Result<T> = std::result::Result<T, ThoughtLoopsError>;
