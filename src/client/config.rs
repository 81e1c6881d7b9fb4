//! Client configuration options.

use std::time::Duration;

use super::reader::{BodyPolicy, DEFAULT_MAX_BODY_BYTES};

/// Default REST API root.
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com/1.1";

/// Configuration for the Twitter client.
///
/// # Example
///
/// ```
/// use tweetlite_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-device/1.0")
///     .with_max_body_bytes(256 * 1024);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root that endpoint paths are appended to
    pub base_url: String,
    /// Request timeout, applied by the transport
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Treat a body shorter than its declared length as a transport failure
    pub strict_content_length: bool,
    /// Largest response body the client will buffer
    pub max_body_bytes: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("tweetlite-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            strict_content_length: false,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Reject bodies that end before their declared length.
    pub fn with_strict_content_length(mut self, strict: bool) -> Self {
        self.strict_content_length = strict;
        self
    }

    /// Cap the buffered response size.
    pub fn with_max_body_bytes(mut self, max: usize) -> Self {
        self.max_body_bytes = max;
        self
    }

    pub(crate) fn body_policy(&self) -> BodyPolicy {
        BodyPolicy {
            strict_length: self.strict_content_length,
            max_bytes: self.max_body_bytes,
        }
    }
}
