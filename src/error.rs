//! Error types for the matching service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::provider::ProviderError;

// == App Error Enum ==
/// Unified error type for the matching service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid configuration, fatal at startup
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The external completion service failed
    #[error("Completion provider failed: {0}")]
    Provider(#[from] ProviderError),

    /// The provider replied, but not with the expected JSON report
    #[error("Malformed provider reply: {0}")]
    MalformedReply(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidConfig(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Provider(err) => {
                tracing::error!("completion provider failed: {err}");
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::MalformedReply(msg) => {
                tracing::error!("malformed provider reply: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to parse the model reply as an analysis report".to_string(),
                )
            }
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the matching service.
pub type Result<T> = std::result::Result<T, AppError>;
