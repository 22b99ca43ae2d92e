//! Client layer: builds wire requests from descriptors, dispatches them
//! and interprets the responses.
//!
//! This module provides:
//! - The dispatch pipeline ([`Client`])
//! - The authorization refresh ceiling ([`RefreshPolicy`])
//! - The error taxonomy surfaced to callers ([`Error`])

mod error;
mod pipeline;
mod refresh;
mod state;

#[cfg(test)]
mod state_tests;

pub use error::Error;
pub use pipeline::Client;
pub use refresh::RefreshPolicy;
