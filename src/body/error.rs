//! Error types for body encoding and decoding.

use thiserror::Error;

/// Error raised while encoding a request body or decoding a response body.
///
/// Codec errors always reach the caller; the client never retries on them.
#[derive(Debug, Error)]
pub enum CodecError {
    /// JSON serialization or deserialization failed.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// A codec tried to set a header that is not legal HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// Header name
        name: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Failure reported by a caller-implemented codec.
    #[error("Codec error: {0}")]
    Custom(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CodecError {
    /// Wraps an arbitrary error from a custom codec.
    pub fn custom(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Custom(error.into())
    }
}
