//! Error types for the form-link client library.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FormLinkError>;

/// Errors produced by the forms client and storage adapter.
///
/// The storage adapter's outer layer collapses most of these into the safe
/// defaults the embedding form library expects; the variants stay
/// distinguishable here so log output can tell a dead backend apart from a
/// form that simply does not exist.
#[derive(Debug, Error)]
pub enum FormLinkError {
    /// Network-level failure: connect, timeout, or body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code returned by the backend
        status_code: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// No form matched the requested name or ID.
    #[error("not found: {what}")]
    NotFound {
        /// Human-readable description of what was looked up
        what: String,
    },

    /// A schema string failed to parse as JSON.
    #[error("malformed schema: {0}")]
    MalformedSchema(#[from] serde_json::Error),

    /// Client was misconfigured (missing base URL, bad transport settings).
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl FormLinkError {
    /// Build a [`FormLinkError::NotFound`] with a description of the lookup.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// True when the error means "no such form" rather than a broken transport.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
