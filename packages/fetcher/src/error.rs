//! Error types for the request fetcher.

use thiserror::Error;

/// Result type for fetcher operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Fetcher errors.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx response. Carries the status code and the raw body text.
    #[error("Fetch error ({status}): {body}")]
    Http { status: u16, body: String },

    /// The network call itself failed (DNS, connect, timeout, reset)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// base URL + path did not form a valid URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Configuration error (unparseable environment value)
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid header '{0}'")]
    InvalidHeader(String),

    /// JSON body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status for `Http` errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}
