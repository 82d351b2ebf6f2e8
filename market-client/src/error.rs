//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed; retryable by re-issuing the same call
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing or rejected credentials; never retried with stale ones
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Resource not found (product code, order id, item id)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected locally before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Service-reported failure (`success: false` envelope)
    #[error("Service error: {message}")]
    Remote {
        code: Option<String>,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<shared::order::OrderError> for ClientError {
    fn from(err: shared::order::OrderError) -> Self {
        Self::Validation(err.to_string())
    }
}
