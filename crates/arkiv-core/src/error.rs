//! Error types for arkiv-core

use thiserror::Error;

pub use crate::validate::ValidationError;

/// Result type alias using arkiv-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the backend or handling a session.
///
/// Nothing here is fatal to the application process: every screen catches
/// its own error and surfaces it as a single generic alert string.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (request rejected, timed out, TLS, DNS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Login rejected or session check failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Malformed response payload
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Required form field missing, caught before any request is issued
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Token store failure on the host platform
    #[error("Secure storage error: {0}")]
    SecureStorage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error came from the client-side required-field checks.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
