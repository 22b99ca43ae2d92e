//! Transport layer: the wire-level request/response values and the
//! capability that physically sends them.
//!
//! This module provides:
//! - The mutable wire request assembled by the client ([`HttpRequest`])
//! - The buffered raw response ([`HttpResponse`], [`ResponseMetadata`])
//! - The transport abstraction ([`HttpTransport`])
//! - A production transport backed by reqwest ([`ReqwestTransport`])

mod client;
mod error;
mod http;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestTransport;
pub use error::TransportError;
pub use http::{HttpRequest, HttpResponse, HttpTransport, ResponseMetadata};
