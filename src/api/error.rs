//! Errors raised by the catalog HTTP client.

use thiserror::Error;

/// Errors that can occur while talking to the catalog backend.
///
/// The effect layer logs every variant and drops it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint URL could not be built from the configured base URL.
    #[error("Invalid URL for {endpoint}: {message}")]
    InvalidUrl {
        endpoint: &'static str,
        message: String,
    },

    /// The request never produced a response (connect, DNS, timeout, reset).
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("{endpoint} returned {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The response body was not the JSON we expected.
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Endpoint label the failure belongs to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl { endpoint, .. }
            | ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }

    /// Short classification for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
        }
    }
}
