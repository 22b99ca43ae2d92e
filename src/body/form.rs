//! `application/x-www-form-urlencoded` bodies.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::transport::HttpRequest;

use super::{CodecError, EncodableBody};

/// Characters left unescaped in form values.
///
/// The URL query set with every general delimiter (`:#[]@`) and sub
/// delimiter (`!$&'()*+,;=`) removed. `/` and `?` stay literal, as RFC 3986
/// section 3.4 allows them in a query.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b'?');

/// MIME type written by [`UrlEncodedBody`].
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// A form body of `key=value` pairs joined by `&`.
///
/// Values are percent-encoded; keys are written verbatim. Pairs are
/// emitted in key order.
///
/// # Example
///
/// ```
/// use typed_http::body::{EncodableBody, UrlEncodedBody};
/// use typed_http::transport::HttpRequest;
///
/// let body = UrlEncodedBody::new([("grant_type", "refresh_token"), ("scope", "read write")]);
/// let mut request = HttpRequest::post(url::Url::parse("https://auth.example.com/token").unwrap());
/// body.encode(&mut request).unwrap();
///
/// assert_eq!(
///     request.body.as_deref(),
///     Some(&b"grant_type=refresh_token&scope=read%20write"[..])
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlEncodedBody {
    params: BTreeMap<String, String>,
}

impl UrlEncodedBody {
    /// Creates a form body from key/value pairs.
    ///
    /// A repeated key keeps the last value.
    pub fn new<K, V>(params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the form fields.
    #[must_use]
    pub const fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Serializes the fields without touching a request.
    #[must_use]
    pub fn to_form_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, FORM_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl EncodableBody for UrlEncodedBody {
    fn encode(&self, request: &mut HttpRequest) -> Result<(), CodecError> {
        request.body = Some(self.to_form_string().into_bytes());
        request.set_content_type(http::HeaderValue::from_static(FORM_URLENCODED));
        Ok(())
    }
}
