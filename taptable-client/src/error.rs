//! Client error types

use thiserror::Error;

/// Client error type
///
/// Every failure carries a human-readable message; `Display` is exactly the
/// message a UI would show. No operation retries automatically.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Login rejected
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Resource not found (carries the entity name, e.g. "Item")
    #[error("{0} not found")]
    NotFound(String),

    /// Operation not available in the active mode
    #[error("{0}")]
    Unsupported(String),

    /// Request input rejected before dispatch
    #[error("{0}")]
    Validation(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Demo store failure
    #[error("Storage error: {0}")]
    Storage(#[from] crate::demo::store::StoreError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
