//! Notification DTOs

use serde::{Deserialize, Serialize};

/// Request to re-send a notice for an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendNotificationDto {
    /// Order ID.
    #[serde(default)]
    pub order_id: String,
}

/// Re-send acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResentDto {
    /// Always true on success.
    pub success: bool,
    /// Notice that was re-sent.
    pub notification: String,
    /// Messages the sender accepted. Zero when a contact was missing or
    /// delivery failed.
    pub delivered: usize,
}
