//! Notification Sender Port (Driven Port)
//!
//! Delivers one rendered message. Delivery is best effort.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Recipient e-mail address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub text_body: String,
    /// HTML body.
    pub html_body: String,
}

/// Notification delivery error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationError {
    /// Transport failed.
    #[error("Notification delivery failed: {message}")]
    DeliveryFailed { message: String },

    /// Recipient address is unusable.
    #[error("Invalid notification recipient: {recipient}")]
    InvalidRecipient { recipient: String },
}

/// Port for delivering notifications.
#[async_trait]
pub trait NotificationSenderPort: Send + Sync {
    /// Deliver a message.
    async fn send(&self, message: OutboundMessage) -> Result<(), NotificationError>;
}
