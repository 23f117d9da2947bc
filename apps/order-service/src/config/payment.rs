//! Payment gateway configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment gateway configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Gateway API base URL.
    #[serde(default = "default_gateway_base_url")]
    pub gateway_base_url: String,
    /// API key id.
    #[serde(default)]
    pub key_id: String,
    /// API key secret. Also the payment signature key.
    #[serde(default)]
    pub key_secret: String,
    /// ISO 4217 currency for intents.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Gateway request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            gateway_base_url: default_gateway_base_url(),
            key_id: String::new(),
            key_secret: String::new(),
            currency: default_currency(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("gateway_base_url", &self.gateway_base_url)
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .field("currency", &self.currency)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_gateway_base_url() -> String {
    "https://api.razorpay.com".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}
