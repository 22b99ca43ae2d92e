//! Authenticator contract consulted by the client.

use async_trait::async_trait;
use thiserror::Error;

use crate::transport::{HttpRequest, HttpResponse};

/// Error raised by an [`Authenticator`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credentials are available to attach or refresh.
    #[error("No credentials available")]
    MissingCredentials,

    /// The credential provider rejected the request or refresh.
    #[error("Credentials rejected: {0}")]
    Rejected(String),

    /// Failure from the authenticator's own machinery (token exchange, storage).
    #[error("Authenticator error: {0}")]
    Custom(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Pluggable capability that attaches credentials and refreshes them.
///
/// The client only keeps a weak reference to its authenticator; the
/// caller owns it and decides how long it lives.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use tokio::sync::RwLock;
/// use typed_http::auth::{AuthError, Authenticator};
/// use typed_http::transport::{HttpRequest, HttpResponse};
///
/// struct BearerToken {
///     token: RwLock<String>,
/// }
///
/// #[async_trait]
/// impl Authenticator for BearerToken {
///     fn apply_authorization(&self, request: &mut HttpRequest) -> Result<(), AuthError> {
///         let token = self.token.try_read().map_err(|_| AuthError::MissingCredentials)?;
///         let value = http::HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
///             .map_err(|e| AuthError::Custom(Box::new(e)))?;
///         request.headers.insert(http::header::AUTHORIZATION, value);
///         Ok(())
///     }
///
///     async fn refresh_authorization(&self, _response: &HttpResponse) -> Result<(), AuthError> {
///         *self.token.write().await = "fresh".to_string();
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Attaches credentials to an outgoing request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] to abort the send.
    fn apply_authorization(&self, request: &mut HttpRequest) -> Result<(), AuthError>;

    /// Refreshes credentials after `response` came back `401 Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the refresh failed; the client then
    /// surfaces the 401 instead of retrying.
    async fn refresh_authorization(&self, response: &HttpResponse) -> Result<(), AuthError>;
}
