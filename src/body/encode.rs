//! Request body encoding contract.

use crate::transport::HttpRequest;

use super::CodecError;

/// A payload that knows how to write itself into an outgoing request.
///
/// Encoding sets [`HttpRequest::body`] and, where relevant, the
/// `Content-Type` header. It runs last while the wire request is built,
/// so a content type written here wins over one from the default or
/// request headers.
///
/// Types implementing [`JsonEncodableBody`](super::JsonEncodableBody)
/// get this trait for free.
///
/// # Example
///
/// ```
/// use typed_http::body::{CodecError, EncodableBody};
/// use typed_http::transport::HttpRequest;
///
/// struct PlainText(String);
///
/// impl EncodableBody for PlainText {
///     fn encode(&self, request: &mut HttpRequest) -> Result<(), CodecError> {
///         request.body = Some(self.0.clone().into_bytes());
///         request.set_content_type(http::HeaderValue::from_static("text/plain"));
///         Ok(())
///     }
/// }
/// ```
pub trait EncodableBody: Send + Sync {
    /// Writes the serialized payload into `request`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the payload cannot be serialized.
    fn encode(&self, request: &mut HttpRequest) -> Result<(), CodecError>;
}

/// The absent body.
///
/// Encoding writes nothing and sets no content type. Decoding accepts any
/// payload and discards it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoBody;

impl EncodableBody for NoBody {
    fn encode(&self, _request: &mut HttpRequest) -> Result<(), CodecError> {
        Ok(())
    }
}
