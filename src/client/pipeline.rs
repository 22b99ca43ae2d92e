//! The dispatch pipeline.

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use url::Url;

use crate::auth::Authenticator;
use crate::body::DecodableBody;
use crate::config::ClientConfig;
use crate::request::Request;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

use super::state::StateHandle;
use super::{Error, RefreshPolicy};

/// Client that turns [`Request`] descriptors into HTTP calls.
///
/// For every call the client builds a wire request (base URL plus path
/// segments, default headers, request headers, credentials, query
/// parameters, body), sends it through the transport and classifies the
/// response:
///
/// - 2xx: the body is decoded into `R::Response`
/// - 401 with a live authenticator: credentials are refreshed and the
///   same descriptor is built and sent again, up to the
///   [`RefreshPolicy`] ceiling
/// - anything else: [`Error::Status`]
///
/// Default headers and the authenticator reference can be changed at any
/// time, including while calls are in flight. Changes apply in the order
/// they are made and are visible to every call started afterwards; a call
/// already being built may or may not see a concurrent change.
///
/// # Type Parameters
///
/// - `T`: The transport implementation
///
/// # Example
///
/// ```no_run
/// use typed_http::client::Client;
/// use typed_http::transport::ReqwestTransport;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(
///     Url::parse("https://api.example.com/v1")?,
///     ReqwestTransport::new(),
/// );
/// client.set_value(Some("application/json"), "Accept");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<T> {
    base_url: Url,
    transport: T,
    refresh_policy: RefreshPolicy,
    state: StateHandle,
}

impl<T> Client<T> {
    /// Creates a client with no default headers and no authenticator.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime; the client's state task
    /// is spawned on the current runtime.
    #[must_use]
    pub fn new(base_url: Url, transport: T) -> Self {
        Self {
            base_url,
            transport,
            refresh_policy: RefreshPolicy::default(),
            state: StateHandle::spawn(),
        }
    }

    /// Creates a client from validated configuration.
    ///
    /// The configured default headers are queued before this returns, so
    /// every call sees them.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn from_config(transport: T, config: &ClientConfig) -> Self {
        let client =
            Self::new(config.base_url.clone(), transport).with_refresh_policy(config.refresh_policy);
        for (name, value) in &config.default_headers {
            client.set_value(Some(value), name);
        }
        client
    }

    /// Sets the authorization refresh ceiling.
    #[must_use]
    pub const fn with_refresh_policy(mut self, policy: RefreshPolicy) -> Self {
        self.refresh_policy = policy;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the refresh policy.
    #[must_use]
    pub const fn refresh_policy(&self) -> &RefreshPolicy {
        &self.refresh_policy
    }

    /// Sets (`Some`) or removes (`None`) a default header.
    ///
    /// Header names are case-insensitive. Names and values are validated
    /// when a request is built, not here.
    pub fn set_value(&self, value: Option<&str>, header: &str) {
        self.state.set_header(header, value.map(ToString::to_string));
    }

    /// Attaches an authenticator without taking ownership of it.
    ///
    /// Once the last `Arc` held by the caller is dropped, the client
    /// behaves as if no authenticator were attached.
    pub fn set_authenticator<A: Authenticator + 'static>(&self, authenticator: &Arc<A>) {
        let weak = Arc::downgrade(authenticator) as Weak<dyn Authenticator>;
        self.state.set_authenticator(Some(weak));
    }

    /// Detaches the authenticator.
    pub fn remove_authenticator(&self) {
        self.state.set_authenticator(None);
    }

    /// Returns the current default headers, keyed by lowercase name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientShutdown`] if the state task is gone.
    pub async fn default_headers(&self) -> Result<BTreeMap<String, String>, Error> {
        Ok(self.state.snapshot().await.ok_or(Error::ClientShutdown)?.headers)
    }

    /// Appends the descriptor's path segments to the base URL.
    ///
    /// Segments containing `/` are split; empty pieces are skipped.
    fn endpoint_url(&self, path: &[String]) -> Result<Url, Error> {
        let pieces: Vec<&str> = path
            .iter()
            .flat_map(|segment| segment.split('/'))
            .filter(|piece| !piece.is_empty())
            .collect();

        let mut url = self.base_url.clone();
        if pieces.is_empty() {
            return Ok(url);
        }

        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(pieces);

        Ok(url)
    }

    /// Builds the wire request for one attempt.
    fn build_request<R: Request>(
        &self,
        request: &R,
        default_headers: &BTreeMap<String, String>,
        authenticator: Option<&dyn Authenticator>,
    ) -> Result<HttpRequest, Error> {
        let url = self.endpoint_url(&request.path())?;
        let mut wire = HttpRequest::new(request.method().into(), url);

        for (name, value) in default_headers {
            insert_header(&mut wire, name, value)?;
        }

        // Request headers replace defaults of the same name.
        for (name, value) in &request.headers() {
            insert_header(&mut wire, name, value)?;
        }

        if let Some(authenticator) = authenticator {
            authenticator.apply_authorization(&mut wire)?;
        }

        request.params().add_to(&mut wire);
        request.body().encode(&mut wire)?;

        Ok(wire)
    }

    /// Resolves the authenticator for an attempt at `request`.
    async fn authenticator_for<R: Request>(
        &self,
        request: &R,
    ) -> Result<(BTreeMap<String, String>, Option<Arc<dyn Authenticator>>), Error> {
        let snapshot = self.state.snapshot().await.ok_or(Error::ClientShutdown)?;
        let authenticator = if request.requires_authorization() {
            snapshot.authenticator()
        } else {
            None
        };
        Ok((snapshot.headers, authenticator))
    }
}

impl<T: HttpTransport> Client<T> {
    /// Sends a request and decodes its response.
    ///
    /// # Errors
    ///
    /// - [`Error::Authorization`] if the authenticator cannot attach credentials
    /// - [`Error::Status`] for a non-2xx response that was not recovered by a refresh
    /// - [`Error::Codec`] if the body cannot be encoded or the response decoded
    /// - [`Error::Transport`] if the transport fails
    /// - [`Error::InvalidUrl`] / [`Error::InvalidHeader`] if the request cannot be built
    /// - [`Error::ClientShutdown`] if the client's state task is gone
    pub async fn send<R: Request>(&self, request: &R) -> Result<R::Response, Error> {
        let mut refreshes = 0;

        loop {
            let (default_headers, authenticator) = self.authenticator_for(request).await?;
            let wire = self.build_request(request, &default_headers, authenticator.as_deref())?;

            tracing::debug!(method = %wire.method, url = %wire.url, "Sending request");
            let response = self.transport.request(wire).await?;
            tracing::debug!(status = %response.status, url = %response.url, "Received response");

            if response.is_success() {
                return decode::<R::Response>(response);
            }

            if response.status == http::StatusCode::UNAUTHORIZED
                && self.refresh(request, &response, refreshes).await?
            {
                refreshes += 1;
                continue;
            }

            return Err(Error::from_response(response));
        }
    }

    /// Attempts an authorization refresh after a 401.
    ///
    /// Returns `Ok(true)` if the request should be sent again.
    async fn refresh<R: Request>(
        &self,
        request: &R,
        response: &HttpResponse,
        performed: u32,
    ) -> Result<bool, Error> {
        let (_, Some(authenticator)) = self.authenticator_for(request).await? else {
            return Ok(false);
        };

        if !self.refresh_policy.allows_refresh(performed) {
            tracing::warn!(
                url = %response.url,
                refreshes = performed,
                "Still unauthorized after refreshing authorization; giving up"
            );
            return Ok(false);
        }

        tracing::info!(url = %response.url, "Received 401, refreshing authorization");
        match authenticator.refresh_authorization(response).await {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::warn!(error = %e, "Authorization refresh failed");
                Ok(false)
            }
        }
    }
}

fn insert_header(request: &mut HttpRequest, name: &str, value: &str) -> Result<(), Error> {
    let header_name =
        http::HeaderName::from_bytes(name.as_bytes()).map_err(|e| Error::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
    let header_value = http::HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    request.headers.insert(header_name, header_value);
    Ok(())
}

fn decode<D: DecodableBody>(response: HttpResponse) -> Result<D, Error> {
    let (metadata, body) = response.into_parts();
    Ok(D::decode(&body, &metadata)?)
}
