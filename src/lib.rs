//! Typed HTTP: a request/response layer over a pluggable transport.
//!
//! Callers describe each API call as a [`Request`](request::Request)
//! with a typed response, and a single [`Client`](client::Client) builds,
//! sends and decodes it, refreshing credentials once on `401 Unauthorized`.

pub mod auth;
pub mod body;
pub mod client;
pub mod config;
pub mod params;
pub mod request;
pub mod transport;
