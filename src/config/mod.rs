//! Configuration layer for the client.
//!
//! This module provides:
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated client configuration ([`ClientConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Headers
//!
//! Default headers come from the `[client.headers]` table. A `bearer`
//! token in `[client]` becomes an `Authorization: Bearer <token>` default
//! header and overrides an `Authorization` entry in the table.
//!
//! Dynamic credentials belong in an [`Authenticator`](crate::auth::Authenticator),
//! not in configuration: a static bearer header is never refreshed.

pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ClientConfig, write_default_config};
