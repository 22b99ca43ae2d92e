//! Error types for transport operations.

use thiserror::Error;

/// Error reported by an [`HttpTransport`](super::HttpTransport).
///
/// The client passes these through to the caller unchanged; it never
/// retries on them.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The transport rejected the URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
