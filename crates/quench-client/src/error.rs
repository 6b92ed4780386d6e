//! Error types for the SAPI client.
//!
//! Only request-level failures live here. Per-item batch failures
//! (`ProblemSubmitError`, `ProblemCancelError`) are ordinary values inside
//! the result sequences returned by the `Problems` resource.

use thiserror::Error;

/// Result type for SAPI operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur when interacting with SAPI.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error on the request side.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Client-side contract violation, raised before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// The service does not know the requested resource.
    #[error("not found: {0}")]
    NotFound(String),

    /// Authentication failed.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Missing API token.
    #[error("missing API token (set QUENCH_API_TOKEN)")]
    MissingToken,

    /// Non-success response from the API.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response JSON does not match the expected record shape.
    #[error("failed to decode {context}: {message}")]
    Decoding {
        context: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Build a decoding error for a named response shape.
    pub(crate) fn decoding(context: &'static str, message: impl Into<String>) -> Self {
        ApiError::Decoding {
            context,
            message: message.into(),
        }
    }
}
