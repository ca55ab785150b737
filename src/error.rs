//! Error types for the deployment guide
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for guide operations
pub type GuideResult<T> = Result<T, GuideError>;

/// Main error type for guide operations
#[derive(Error, Debug)]
pub enum GuideError {
    /// Reading a line from the operator failed
    #[error("failed to read input for prompt '{prompt}': {source}")]
    Prompt {
        prompt: String,
        #[source]
        source: std::io::Error,
    },

    /// The deployment summary could not be written
    #[error("failed to write deployment summary to {path}: {source}")]
    SummaryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Console output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A deeplink did not carry a decodable config payload
    #[error("invalid deeplink: {message}")]
    DeeplinkDecode { message: String },
}
