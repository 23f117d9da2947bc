//! Notification Dispatcher
//!
//! Background consumer of order events. Maps each event to zero or more
//! outbound messages and hands them to the notification sender once.
//! Nothing here is reported back to the request that caused the event.
//! A single notice can also be re-sent on demand for a stored order.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{
    ContactDirectoryPort, NotificationSenderPort, OutboundMessage, RestaurantContact, UserContact,
};
use crate::application::services::notification_template;
use crate::domain::order_fulfillment::aggregate::Order;
use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::order_fulfillment::events::OrderEvent;
use crate::domain::order_fulfillment::repository::OrderRepository;
use crate::domain::shared::OrderId;

/// Which parties an event notifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// User "placed" and restaurant "arrived" messages.
    Placed,
    /// User "ready" message.
    Completed,
    /// User "cancelled" message.
    Cancelled,
}

impl NotificationKind {
    /// Notification kind for an event, `None` for silent events.
    #[must_use]
    pub const fn for_event(event: &OrderEvent) -> Option<Self> {
        match event {
            OrderEvent::Placed(_) => Some(Self::Placed),
            OrderEvent::Completed(_) => Some(Self::Completed),
            OrderEvent::Cancelled(_) => Some(Self::Cancelled),
            OrderEvent::StatusChanged(_) | OrderEvent::PaymentConfirmed(_) => None,
        }
    }

    /// Notices sent for this kind, in delivery order.
    #[must_use]
    pub const fn notices(self) -> &'static [Notice] {
        match self {
            Self::Placed => &[Notice::UserOrderPlaced, Notice::RestaurantOrderArrived],
            Self::Completed => &[Notice::UserOrderCompleted],
            Self::Cancelled => &[Notice::UserOrderCancelled],
        }
    }
}

/// One templated message to one party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// New order for the restaurant.
    RestaurantOrderArrived,
    /// Placement confirmation for the diner.
    UserOrderPlaced,
    /// Order ready for the diner.
    UserOrderCompleted,
    /// Cancellation for the diner.
    UserOrderCancelled,
}

impl Notice {
    /// Route segment naming the notice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RestaurantOrderArrived => "restaurant-order-arrived",
            Self::UserOrderPlaced => "user-order-placed",
            Self::UserOrderCompleted => "user-order-completed",
            Self::UserOrderCancelled => "user-order-cancelled",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized notice name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification '{0}'")]
pub struct UnknownNotice(pub String);

impl FromStr for Notice {
    type Err = UnknownNotice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant-order-arrived" => Ok(Self::RestaurantOrderArrived),
            "user-order-placed" => Ok(Self::UserOrderPlaced),
            "user-order-completed" => Ok(Self::UserOrderCompleted),
            "user-order-cancelled" => Ok(Self::UserOrderCancelled),
            other => Err(UnknownNotice(other.to_string())),
        }
    }
}

/// Turns order events into delivered notifications.
pub struct NotificationDispatcher<O, D, S>
where
    O: OrderRepository,
    D: ContactDirectoryPort,
    S: NotificationSenderPort,
{
    orders: Arc<O>,
    directory: Arc<D>,
    sender: Arc<S>,
}

impl<O, D, S> NotificationDispatcher<O, D, S>
where
    O: OrderRepository,
    D: ContactDirectoryPort,
    S: NotificationSenderPort,
{
    /// Create a new `NotificationDispatcher`.
    pub const fn new(orders: Arc<O>, directory: Arc<D>, sender: Arc<S>) -> Self {
        Self {
            orders,
            directory,
            sender,
        }
    }

    /// Consume events until every sender half of the channel is dropped.
    pub async fn run(self, mut receiver: mpsc::Receiver<OrderEvent>) {
        tracing::info!("Notification dispatcher started");
        while let Some(event) = receiver.recv().await {
            self.dispatch(&event).await;
        }
        tracing::info!("Notification dispatcher stopped, queue drained");
    }

    /// Deliver the notifications for one event.
    ///
    /// Returns the number of messages the sender accepted. Failures are
    /// logged and never retried.
    pub async fn dispatch(&self, event: &OrderEvent) -> usize {
        let Some(kind) = NotificationKind::for_event(event) else {
            return 0;
        };
        let order = match self.orders.find_by_id(event.order_id()).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                tracing::warn!(
                    order_id = %event.order_id(),
                    event = event.event_type(),
                    "Skipping notification, order not found"
                );
                return 0;
            }
            Err(e) => {
                tracing::warn!(
                    order_id = %event.order_id(),
                    event = event.event_type(),
                    error = %e,
                    "Skipping notification, order lookup failed"
                );
                return 0;
            }
        };
        self.deliver(&order, kind.notices()).await
    }

    /// Send one notice again for a stored order, whatever its status.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown order, or the repository's error. Delivery
    /// problems are logged and show up as a zero count.
    pub async fn resend(&self, order_id: &OrderId, notice: Notice) -> Result<usize, OrderError> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_id: order_id.to_string(),
            })?;
        tracing::info!(order_id = %order_id, notice = %notice, "Re-sending notification");
        Ok(self.deliver(&order, &[notice]).await)
    }

    async fn deliver(&self, order: &Order, notices: &[Notice]) -> usize {
        let messages = match self.render(order, notices).await {
            Ok(messages) => messages,
            Err(reason) => {
                tracing::warn!(
                    order_id = %order.id(),
                    reason = %reason,
                    "Skipping notification"
                );
                return 0;
            }
        };

        let mut delivered = 0;
        for message in messages {
            let recipient = message.recipient.clone();
            match self.sender.send(message).await {
                Ok(()) => {
                    delivered += 1;
                    tracing::debug!(order_id = %order.id(), recipient = %recipient, "Notification sent");
                }
                Err(e) => {
                    tracing::warn!(
                        order_id = %order.id(),
                        recipient = %recipient,
                        error = %e,
                        "Notification delivery failed"
                    );
                }
            }
        }
        delivered
    }

    async fn render(
        &self,
        order: &Order,
        notices: &[Notice],
    ) -> Result<Vec<OutboundMessage>, String> {
        let user = self.load_user(order).await?;

        let mut messages = Vec::with_capacity(notices.len());
        for notice in notices {
            let message = match notice {
                Notice::UserOrderPlaced => {
                    let restaurant = self.load_restaurant(order).await?;
                    notification_template::order_placed_for_user(order, &user, &restaurant)
                }
                Notice::RestaurantOrderArrived => {
                    let restaurant = self.load_restaurant(order).await?;
                    notification_template::order_arrived_for_restaurant(order, &user, &restaurant)
                }
                Notice::UserOrderCompleted => {
                    notification_template::order_completed_for_user(order, &user)
                }
                Notice::UserOrderCancelled => {
                    notification_template::order_cancelled_for_user(order, &user)
                }
            };
            messages.push(message);
        }
        Ok(messages)
    }

    async fn load_user(&self, order: &Order) -> Result<UserContact, String> {
        self.directory
            .find_user(order.user_id())
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("user {} not found", order.user_id()))
    }

    async fn load_restaurant(&self, order: &Order) -> Result<RestaurantContact, String> {
        self.directory
            .find_restaurant(order.restaurant_id())
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("restaurant {} not found", order.restaurant_id()))
    }
}
