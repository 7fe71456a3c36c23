//! Giphy integration error types

use thiserror::Error;

use crate::config::GIPHY_API_KEY_VAR;

/// Errors that can occur in the Giphy integration
///
/// Only [`MissingApiKey`](Self::MissingApiKey) ever reaches a caller of the
/// search port; the per-call variants are logged inside the adapter and
/// collapsed to an absent result.
#[derive(Debug, Error)]
pub enum GiphyError {
    /// API key missing from both the configuration and the environment
    #[error(
        "Giphy API key was not provided and the {GIPHY_API_KEY_VAR} environment variable is not set"
    )]
    MissingApiKey,

    /// Connection to the Giphy API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the Giphy API failed (including non-2xx status)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
