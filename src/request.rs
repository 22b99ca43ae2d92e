//! Request descriptors: the caller-defined description of one API call.

use std::collections::HashMap;
use std::fmt;

use crate::body::{DecodableBody, EncodableBody, NoBody};
use crate::params::Params;

/// HTTP methods a [`Request`] can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Returns the method token as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Description of one logical API call and the type it answers with.
///
/// Only [`path`](Self::path) and [`method`](Self::method) are required;
/// everything else defaults to "nothing extra, authorization required".
///
/// A descriptor may be sent more than once (after an authorization
/// refresh), so every accessor must return the same values each time.
///
/// # Example
///
/// ```
/// use serde::Deserialize;
/// use typed_http::body::JsonDecodableBody;
/// use typed_http::request::{Method, Request};
///
/// #[derive(Deserialize)]
/// struct User {
///     id: u64,
///     display_name: String,
/// }
///
/// impl JsonDecodableBody for User {}
///
/// struct GetUser {
///     id: u64,
/// }
///
/// impl Request for GetUser {
///     type Response = User;
///
///     fn path(&self) -> Vec<String> {
///         vec!["users".to_string(), self.id.to_string()]
///     }
///
///     fn method(&self) -> Method {
///         Method::Get
///     }
/// }
/// ```
pub trait Request: Send + Sync {
    /// The decoded response payload.
    type Response: DecodableBody;

    /// Path segments appended, in order, to the client's base URL.
    fn path(&self) -> Vec<String>;

    /// HTTP method.
    fn method(&self) -> Method;

    /// Request-specific headers, applied after the client's defaults.
    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    /// Extra query parameters.
    fn params(&self) -> Params {
        Params::None
    }

    /// Request body.
    fn body(&self) -> &dyn EncodableBody {
        &NoBody
    }

    /// Whether the client's authenticator should be consulted.
    fn requires_authorization(&self) -> bool {
        true
    }
}
