//! Razorpay adapter configuration.

use std::fmt;
use std::time::Duration;

/// Default public API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com";

/// Configuration for the Razorpay adapter.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// API key id.
    pub key_id: String,
    /// API key secret. Also signs payment completions.
    pub key_secret: String,
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl RazorpayConfig {
    /// Create a configuration for the public endpoint.
    #[must_use]
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Point the adapter at another endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the orders collection.
    #[must_use]
    pub fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.base_url)
    }
}

impl fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
