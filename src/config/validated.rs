//! Validated client configuration.
//!
//! All validation is performed during construction, so a
//! [`ClientConfig`] can be handed to [`Client::from_config`](crate::client::Client::from_config)
//! without further checks.

use std::fmt;
use std::path::Path;

use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use url::Url;

use crate::client::RefreshPolicy;

use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL (required)
    pub base_url: Url,

    /// Default headers, sorted by lowercase name
    pub default_headers: Vec<(String, String)>,

    /// Authorization refresh ceiling
    pub refresh_policy: RefreshPolicy,
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header values are omitted; they may hold credentials.
        let names: Vec<&str> = self.default_headers.iter().map(|(n, _)| n.as_str()).collect();
        write!(
            f,
            "ClientConfig {{ base_url: {}, headers: [{}], max_refreshes: {} }}",
            self.base_url,
            names.join(", "),
            self.refresh_policy.max_refreshes,
        )
    }
}

impl ClientConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&TomlConfig::load(path)?)
    }

    /// Validates a parsed TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `client.base_url` is missing or invalid
    /// - A header name or value is not legal HTTP
    pub fn from_toml(toml: &TomlConfig) -> Result<Self, ConfigError> {
        let base_url = Self::resolve_base_url(toml)?;
        let default_headers = Self::resolve_headers(toml)?;
        let refresh_policy = RefreshPolicy::new().with_max_refreshes(
            toml.auth.max_refreshes.unwrap_or(defaults::MAX_REFRESHES),
        );

        Ok(Self {
            base_url,
            default_headers,
            refresh_policy,
        })
    }

    fn resolve_base_url(toml: &TomlConfig) -> Result<Url, ConfigError> {
        let raw = toml.client.base_url.as_deref().ok_or_else(|| {
            ConfigError::missing(field::BASE_URL, "Set base_url in the [client] section.")
        })?;

        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: raw.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_headers(toml: &TomlConfig) -> Result<Vec<(String, String)>, ConfigError> {
        let mut headers: Vec<(String, String)> = Vec::new();

        for (name, value) in &toml.client.headers {
            let header_name = parse_header_name(name)?;
            parse_header_value(name, value)?;
            if headers.iter().any(|(existing, _)| existing == header_name.as_str()) {
                return Err(ConfigError::InvalidHeaderName {
                    name: name.clone(),
                    reason: format!("'{header_name}' is set more than once"),
                });
            }
            headers.push((header_name.as_str().to_string(), value.clone()));
        }

        if let Some(token) = toml.client.bearer.as_deref() {
            let auth_value = format!("Bearer {token}");
            parse_header_value(AUTHORIZATION.as_str(), &auth_value)?;
            headers.retain(|(name, _)| name != AUTHORIZATION.as_str());
            headers.push((AUTHORIZATION.as_str().to_string(), auth_value));
        }

        headers.sort();
        Ok(headers)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse::<HeaderName>()
        .map_err(|e| ConfigError::InvalidHeaderName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
