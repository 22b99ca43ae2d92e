//! HTTP request/response types and transport trait.

use super::TransportError;

/// A wire-level HTTP request.
///
/// This is the mutable request the client assembles from a
/// [`Request`](crate::request::Request) descriptor before handing it to an
/// [`HttpTransport`]. Body codecs and authenticators write into it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PUT, DELETE)
    pub method: http::Method,
    /// Target URL, including any merged query parameters
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    ///
    /// Headers are initialized to an empty map and body is `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended
    /// (HTTP headers can have multiple values).
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Replaces the `Content-Type` header with a single value.
    pub fn set_content_type(&mut self, value: http::HeaderValue) {
        self.headers.insert(http::header::CONTENT_TYPE, value);
    }
}

/// The parts of a response that describe it, without the body.
///
/// Handed to body decoders and carried by status errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Final URL the response was served from
    pub url: url::Url,
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
}

/// An HTTP response received from a server.
///
/// Contains the status code, headers, and body of the response.
/// The body is fully buffered into memory.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Final URL the response was served from
    pub url: url::Url,
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(
        url: url::Url,
        status: http::StatusCode,
        headers: http::HeaderMap,
        body: Vec<u8>,
    ) -> Self {
        Self {
            url,
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Returns a copy of the response metadata.
    #[must_use]
    pub fn metadata(&self) -> ResponseMetadata {
        ResponseMetadata {
            url: self.url.clone(),
            status: self.status,
            headers: self.headers.clone(),
        }
    }

    /// Splits the response into its metadata and body.
    #[must_use]
    pub fn into_parts(self) -> (ResponseMetadata, Vec<u8>) {
        (
            ResponseMetadata {
                url: self.url,
                status: self.status,
                headers: self.headers,
            },
            self.body,
        )
    }
}

/// Capability that physically sends a fully built request.
///
/// # Design
///
/// The client never talks to the network directly. Connection reuse,
/// TLS, redirects and timeouts are all the transport's business, which
/// keeps the dispatch pipeline testable with in-memory transports.
///
/// # Example
///
/// ```ignore
/// use typed_http::transport::{HttpTransport, HttpRequest, HttpResponse, TransportError};
///
/// struct MockTransport {
///     response: HttpResponse,
/// }
///
/// impl HttpTransport for MockTransport {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpTransport: Send + Sync {
    /// Sends an HTTP request and returns the buffered response.
    ///
    /// Any status code, including 4xx and 5xx, is a successful transport
    /// round trip and must be returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when:
    /// - Network connection fails ([`TransportError::Connection`])
    /// - Request times out ([`TransportError::Timeout`])
    /// - URL is rejected ([`TransportError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}
