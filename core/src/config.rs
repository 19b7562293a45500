//! Settings for the default transport.

use std::time::Duration;

/// Configuration used when a `Client` creates its own transport.
///
/// Ignored by clients built with `Client::with_transport`; an injected
/// transport carries its own policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Follow `Location` on 3xx responses. Off by default: a redirect is
    /// returned to the caller like any other response.
    pub follow_redirects: bool,
    /// Upper bound on hops when `follow_redirects` is on.
    pub max_redirects: u32,
    /// Deadline for the whole call, including reading the body.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            follow_redirects: false,
            max_redirects: 10,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    pub fn with_max_redirects(mut self, max: u32) -> Self {
        self.max_redirects = max;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Number of redirects the transport may follow.
    pub(crate) fn redirect_limit(&self) -> u32 {
        if self.follow_redirects {
            self.max_redirects
        } else {
            0
        }
    }
}
