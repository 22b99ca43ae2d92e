//! Ceiling on authorization refreshes for a single call.

/// How many times one [`Client::send`](super::Client::send) call may
/// refresh authorization after a `401 Unauthorized`.
///
/// With the default of one refresh, a rejected request is re-sent exactly
/// once; a second 401 is returned to the caller. A ceiling of zero
/// disables refresh altogether.
///
/// # Example
///
/// ```
/// use typed_http::client::RefreshPolicy;
///
/// let policy = RefreshPolicy::new().with_max_refreshes(2);
/// assert!(policy.allows_refresh(1));
/// assert!(!policy.allows_refresh(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    /// Maximum number of refreshes per call.
    pub max_refreshes: u32,
}

impl RefreshPolicy {
    /// Default number of refreshes per call.
    pub const DEFAULT_MAX_REFRESHES: u32 = 1;

    /// Creates a policy with the default ceiling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_refreshes: Self::DEFAULT_MAX_REFRESHES,
        }
    }

    /// Creates a policy that never refreshes.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { max_refreshes: 0 }
    }

    /// Sets the maximum number of refreshes per call.
    #[must_use]
    pub const fn with_max_refreshes(mut self, max_refreshes: u32) -> Self {
        self.max_refreshes = max_refreshes;
        self
    }

    /// Returns true if another refresh is allowed after `performed` refreshes.
    #[must_use]
    pub const fn allows_refresh(&self, performed: u32) -> bool {
        performed < self.max_refreshes
    }
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::new()
    }
}
