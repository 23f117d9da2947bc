//! Notification sender that only logs.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationSenderPort, OutboundMessage};

/// Writes messages to the log instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct LoggingNotificationSender;

#[async_trait]
impl NotificationSenderPort for LoggingNotificationSender {
    async fn send(&self, message: OutboundMessage) -> Result<(), NotificationError> {
        if message.recipient.trim().is_empty() {
            return Err(NotificationError::InvalidRecipient {
                recipient: message.recipient,
            });
        }
        tracing::info!(
            recipient = %message.recipient,
            subject = %message.subject,
            body = %message.text_body,
            "Notification"
        );
        Ok(())
    }
}
