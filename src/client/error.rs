//! Error types surfaced by the client.

use crate::auth::AuthError;
use crate::body::CodecError;
use crate::transport::{HttpResponse, ResponseMetadata, TransportError};

/// Error returned by [`Client::send`](super::Client::send).
///
/// A call either yields a decoded response or exactly one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The authenticator failed to attach credentials.
    #[error("Authorization failed: {0}")]
    Authorization(#[from] AuthError),

    /// The server answered with a non-2xx status that was not recovered.
    #[error("HTTP status {status} from {}", response.url)]
    Status {
        /// Response status code
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8
        body: Option<String>,
        /// The rest of the response
        response: ResponseMetadata,
    },

    /// Encoding the request body or decoding the response body failed.
    #[error("Body codec failed: {0}")]
    Codec(#[from] CodecError),

    /// The transport could not complete the round trip.
    #[error("Transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The base URL cannot have path segments appended.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A default or request header is not legal HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// Header name as given
        name: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The client's state task is gone, usually because the runtime that
    /// created the client has shut down.
    #[error("Client state is no longer available")]
    ClientShutdown,
}

impl Error {
    /// Builds a [`Error::Status`] from a response.
    #[must_use]
    pub fn from_response(response: HttpResponse) -> Self {
        let body = response.body_text().map(ToString::to_string);
        let (response, _) = response.into_parts();
        Self::Status {
            status: response.status,
            body,
            response,
        }
    }

    /// Returns the HTTP status for [`Error::Status`].
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
