//! Domain events for order fulfillment.
//!
//! Every mutation of an [`Order`](super::Order) records exactly one event.
//! Events are drained after the order is persisted and handed to the
//! event publisher; nothing in the domain waits on their delivery.

use serde::{Deserialize, Serialize};

use super::value_objects::{OrderStatus, OrderType};
use crate::domain::shared::{
    GatewayOrderId, GatewayPaymentId, Money, OrderId, RestaurantId, Timestamp, UserId,
};

/// All possible order events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEvent {
    /// Order created in `PENDING`.
    Placed(OrderPlaced),
    /// Order moved to `PREPARING` or `READY`.
    StatusChanged(OrderStatusChanged),
    /// Order reached `COMPLETED`.
    Completed(OrderCompleted),
    /// Order reached `CANCELLED`.
    Cancelled(OrderCancelled),
    /// Payment signature verified and the order marked paid.
    PaymentConfirmed(PaymentConfirmed),
}

impl OrderEvent {
    /// Get the order ID for this event.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        match self {
            Self::Placed(e) => &e.order_id,
            Self::StatusChanged(e) => &e.order_id,
            Self::Completed(e) => &e.order_id,
            Self::Cancelled(e) => &e.order_id,
            Self::PaymentConfirmed(e) => &e.order_id,
        }
    }

    /// Get the timestamp when this event occurred.
    #[must_use]
    pub const fn occurred_at(&self) -> Timestamp {
        match self {
            Self::Placed(e) => e.occurred_at,
            Self::StatusChanged(e) => e.occurred_at,
            Self::Completed(e) => e.occurred_at,
            Self::Cancelled(e) => e.occurred_at,
            Self::PaymentConfirmed(e) => e.occurred_at,
        }
    }

    /// Get the event type name.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::Placed(_) => "ORDER_PLACED",
            Self::StatusChanged(_) => "ORDER_STATUS_CHANGED",
            Self::Completed(_) => "ORDER_COMPLETED",
            Self::Cancelled(_) => "ORDER_CANCELLED",
            Self::PaymentConfirmed(_) => "PAYMENT_CONFIRMED",
        }
    }
}

/// Event: order placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlaced {
    /// Order ID.
    pub order_id: OrderId,
    /// Ordering diner.
    pub user_id: UserId,
    /// Restaurant the order was placed with.
    pub restaurant_id: RestaurantId,
    /// Order type.
    pub order_type: OrderType,
    /// Order total.
    pub total_amount: Money,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: intermediate status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusChanged {
    /// Order ID.
    pub order_id: OrderId,
    /// Previous status.
    pub from: OrderStatus,
    /// New status.
    pub to: OrderStatus,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: order completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCompleted {
    /// Order ID.
    pub order_id: OrderId,
    /// Ordering diner.
    pub user_id: UserId,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: order cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancelled {
    /// Order ID.
    pub order_id: OrderId,
    /// Ordering diner.
    pub user_id: UserId,
    /// Status the order was in when cancelled.
    pub previous_status: OrderStatus,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: payment confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmed {
    /// Order ID.
    pub order_id: OrderId,
    /// Gateway intent the payment belongs to.
    pub gateway_order_id: GatewayOrderId,
    /// Gateway payment id.
    pub gateway_payment_id: GatewayPaymentId,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn order_event_order_id() {
        let event = OrderEvent::Completed(OrderCompleted {
            order_id: OrderId::new("ord-123"),
            user_id: UserId::new("user-1"),
            occurred_at: Timestamp::now(),
        });

        assert_eq!(event.order_id().as_str(), "ord-123");
        assert_eq!(event.event_type(), "ORDER_COMPLETED");
    }

    #[test]
    fn order_event_serde() {
        let event = OrderEvent::Placed(OrderPlaced {
            order_id: OrderId::new("ord-123"),
            user_id: UserId::new("user-1"),
            restaurant_id: RestaurantId::new("rest-1"),
            order_type: OrderType::HomeDelivery,
            total_amount: Money::new(dec!(25)),
            occurred_at: Timestamp::now(),
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("PLACED"));
        assert!(json.contains("HOME_DELIVERY"));

        let parsed: OrderEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
