//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Transport failure (connection refused, DNS, TLS, ...)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-2xx response
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// 401 / 403 from the admin API
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Local input rejected before any request was issued
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The auth guard refused the current session
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The resource does not offer this operation
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, rejected login, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_)
            | Self::AccessDenied(_)
            | Self::Unauthorized(_)
            | Self::Unsupported(_) => true,
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Logs the error at the level matching [`Self::is_expected`].
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
