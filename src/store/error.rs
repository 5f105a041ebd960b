//! Error types for data store access.

use thiserror::Error;

/// Errors that can occur while talking to the data store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Transport failure (DNS, connection refused, timeout).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Store answered with a non-success status.
    #[error("Store returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON shape.
    #[error("Failed to decode store response: {0}")]
    Decode(String),

    /// No API key in the configured environment variable.
    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    /// No store URL configured.
    #[error("Store URL is not configured")]
    MissingUrl,
}
