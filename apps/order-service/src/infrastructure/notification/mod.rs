//! Notification Sender Adapters
//!
//! - `LoggingNotificationSender`: writes each message to the log
//! - `WebhookNotificationSender`: posts each message to a mail relay
//! - `NotificationSenderAdapter`: the one selected by configuration

mod logging;
mod webhook;

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationSenderPort, OutboundMessage};

pub use logging::LoggingNotificationSender;
pub use webhook::WebhookNotificationSender;

/// Configured notification sender.
#[derive(Debug, Clone)]
pub enum NotificationSenderAdapter {
    /// Log only.
    Logging(LoggingNotificationSender),
    /// HTTP relay.
    Webhook(WebhookNotificationSender),
}

#[async_trait]
impl NotificationSenderPort for NotificationSenderAdapter {
    async fn send(&self, message: OutboundMessage) -> Result<(), NotificationError> {
        match self {
            Self::Logging(sender) => sender.send(message).await,
            Self::Webhook(sender) => sender.send(message).await,
        }
    }
}
