//! Provider error types
//!
//! Every failure of a single provider call maps onto one of these variants.
//! None of them are fatal: the search controller scopes them to the fetch
//! cycle that produced them.

use thiserror::Error;

/// Errors that can occur while talking to the remote search provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status code
    #[error("Provider returned HTTP status {status}")]
    Status {
        /// Numeric HTTP status
        status: u16,
    },

    /// The response body was not the expected JSON shape
    #[error("Malformed provider payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint cannot be used to build request URLs
    #[error("Invalid provider endpoint: {0}")]
    InvalidEndpoint(String),

    /// The fetch never produced a response (worker failed to start or panicked)
    #[error("Fetch aborted: {0}")]
    Aborted(String),
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;
