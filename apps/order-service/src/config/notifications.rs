//! Notification delivery configuration.

use serde::{Deserialize, Serialize};

/// How notifications leave the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderKind {
    /// Write to the log.
    #[default]
    Log,
    /// Post to an HTTP mail relay.
    Webhook,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Sender implementation.
    #[serde(default)]
    pub sender: SenderKind,
    /// Relay URL, required for `webhook`.
    #[serde(default)]
    pub webhook_url: String,
    /// Sender address.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Relay request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Event queue capacity.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            sender: SenderKind::default(),
            webhook_url: String::new(),
            from_address: default_from_address(),
            timeout_secs: default_timeout_secs(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_from_address() -> String {
    "orders@localhost".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_queue_capacity() -> usize {
    1024
}
