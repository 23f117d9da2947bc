//! Notification sender posting to an HTTP mail relay.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{NotificationError, NotificationSenderPort, OutboundMessage};

/// Relay payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

/// Posts each message as JSON to a relay URL.
#[derive(Debug, Clone)]
pub struct WebhookNotificationSender {
    client: Client,
    url: String,
    from_address: String,
}

impl WebhookNotificationSender {
    /// Create a sender for `url`.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryFailed` if the HTTP client cannot be built.
    pub fn new(
        url: impl Into<String>,
        from_address: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotificationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotificationError::DeliveryFailed {
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            url: url.into(),
            from_address: from_address.into(),
        })
    }
}

#[async_trait]
impl NotificationSenderPort for WebhookNotificationSender {
    async fn send(&self, message: OutboundMessage) -> Result<(), NotificationError> {
        if message.recipient.trim().is_empty() {
            return Err(NotificationError::InvalidRecipient {
                recipient: message.recipient,
            });
        }

        let payload = RelayMessage {
            from: &self.from_address,
            to: &message.recipient,
            subject: &message.subject,
            text: &message.text_body,
            html: &message.html_body,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotificationError::DeliveryFailed {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotificationError::DeliveryFailed {
                message: format!("relay answered {status}"),
            });
        }
        Ok(())
    }
}
