//! Optimizer-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("{message}")]
    Validation { message: String },

    #[error("History is unavailable")]
    HistoryUnavailable,

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type OptimizerResult<T> = Result<T, OptimizerError>;

impl OptimizerError {
    /// Create a validation error with the given caller-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Maps each error to its HTTP status and JSON body. Validation messages
/// are caller-facing; everything else is opaque and logged server-side.
impl IntoResponse for OptimizerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            OptimizerError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            OptimizerError::HistoryUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not load history.".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error occurred.".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message_is_caller_facing() {
        let err = OptimizerError::validation("Budget must be a positive integer.");
        assert_eq!(err.to_string(), "Budget must be a positive integer.");
    }

    #[tokio::test]
    async fn test_internal_errors_are_opaque() {
        let err = OptimizerError::InternalError("disk on fire".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
