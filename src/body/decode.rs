//! Response body decoding contract.

use crate::transport::ResponseMetadata;

use super::{CodecError, NoBody};

/// A type that can be produced from a successful response.
///
/// Decoders receive the raw body bytes together with the response
/// metadata, so payloads can read headers (pagination links, rate-limit
/// counters) alongside the body.
///
/// Types implementing [`JsonDecodableBody`](super::JsonDecodableBody)
/// get this trait for free.
pub trait DecodableBody: Sized + Send {
    /// Parses the response body.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the body cannot be parsed.
    fn decode(data: &[u8], response: &ResponseMetadata) -> Result<Self, CodecError>;
}

impl DecodableBody for NoBody {
    fn decode(_data: &[u8], _response: &ResponseMetadata) -> Result<Self, CodecError> {
        Ok(Self)
    }
}
