//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional here; [`ClientConfig`](super::ClientConfig)
/// enforces what is required.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Client configuration section
    #[serde(default)]
    pub client: ClientSection,

    /// Authorization configuration section
    #[serde(default)]
    pub auth: AuthSection,
}

/// Client configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// Base URL all request paths are appended to
    pub base_url: Option<String>,

    /// Default headers as key-value pairs
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Static bearer token for the Authorization header
    pub bearer: Option<String>,
}

/// Authorization configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    /// Maximum authorization refreshes per call
    pub max_refreshes: Option<u32>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Client configuration

[client]
# Base URL all request paths are appended to (required)
base_url = "https://api.example.com/v1"

# Static bearer token sent as "Authorization: Bearer <token>"
# bearer = "your-token-here"

# Default headers sent with every request
# [client.headers]
# Accept = "application/json"

[auth]
# Authorization refreshes allowed per call after a 401 (default: 1, 0 disables)
# max_refreshes = 1
"#
    .to_string()
}
