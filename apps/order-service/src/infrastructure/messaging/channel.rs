//! In-process event queue.
//!
//! Publishing never waits: events are offered with `try_send` and dropped
//! with a warning when the queue is full.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::ports::{EventPublishError, EventPublisherPort};
use crate::domain::order_fulfillment::events::OrderEvent;

/// Publishes order events onto a bounded channel.
#[derive(Debug, Clone)]
pub struct ChannelEventPublisher {
    tx: mpsc::Sender<OrderEvent>,
}

impl ChannelEventPublisher {
    /// Create a publisher and the receiving end of its queue.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<OrderEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl EventPublisherPort for ChannelEventPublisher {
    async fn publish_order_events(&self, events: Vec<OrderEvent>) -> Result<(), EventPublishError> {
        let mut dropped = 0;
        for event in events {
            let order_id = event.order_id().clone();
            let event_type = event.event_type();
            match self.tx.try_send(event) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    tracing::warn!(order_id = %order_id, event_type, "Event queue full, dropping event");
                    dropped += 1;
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    return Err(EventPublishError::Closed);
                }
            }
        }

        if dropped > 0 {
            return Err(EventPublishError::QueueFull { dropped });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_fulfillment::events::OrderCompleted;
    use crate::domain::shared::{OrderId, Timestamp, UserId};

    fn completed(id: &str) -> OrderEvent {
        OrderEvent::Completed(OrderCompleted {
            order_id: OrderId::new(id),
            user_id: UserId::new("user-1"),
            occurred_at: Timestamp::now(),
        })
    }

    #[tokio::test]
    async fn delivers_in_order() {
        let (publisher, mut rx) = ChannelEventPublisher::channel(4);

        publisher
            .publish_order_events(vec![completed("a"), completed("b")])
            .await
            .unwrap();

        assert_eq!(rx.recv().await.unwrap().order_id().as_str(), "a");
        assert_eq!(rx.recv().await.unwrap().order_id().as_str(), "b");
    }

    #[tokio::test]
    async fn full_queue_drops_without_waiting() {
        let (publisher, mut rx) = ChannelEventPublisher::channel(1);

        let err = publisher
            .publish_order_events(vec![completed("a"), completed("b"), completed("c")])
            .await
            .unwrap_err();

        assert!(matches!(err, EventPublishError::QueueFull { dropped: 2 }));
        assert_eq!(rx.recv().await.unwrap().order_id().as_str(), "a");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn closed_queue_is_reported() {
        let (publisher, rx) = ChannelEventPublisher::channel(1);
        drop(rx);

        let err = publisher.publish_order_event(completed("a")).await.unwrap_err();
        assert!(matches!(err, EventPublishError::Closed));
    }
}
