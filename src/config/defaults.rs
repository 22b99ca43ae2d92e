//! Default values for configuration options.

/// Default number of authorization refreshes per call.
pub const MAX_REFRESHES: u32 = crate::client::RefreshPolicy::DEFAULT_MAX_REFRESHES;
