//! Transport configuration for the outbound HTTP client.

use std::collections::HashMap;
use std::time::Duration;

/// How requests to the chat endpoint are sent.
///
/// The default sets no timeout, no proxy and no extra headers, so a hung
/// upstream call waits indefinitely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Whole-request timeout.
    pub timeout: Option<Duration>,
    /// Proxy URL applied to every scheme.
    pub proxy: Option<String>,
    /// Headers sent with every request, in addition to auth and content type.
    pub headers: HashMap<String, String>,
}

impl TransportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy = Some(proxy_url.into());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}
