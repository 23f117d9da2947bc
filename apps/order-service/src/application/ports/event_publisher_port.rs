//! Event Publisher Port (Driven Port)
//!
//! Interface for handing domain events to whatever consumes them.
//! Publishing must not wait for the events to be processed.

use async_trait::async_trait;

use crate::domain::order_fulfillment::events::OrderEvent;

/// Event publishing error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventPublishError {
    /// The queue is at capacity.
    #[error("Event queue full, dropped {dropped} event(s)")]
    QueueFull { dropped: usize },

    /// The consumer has shut down.
    #[error("Event queue closed")]
    Closed,
}

/// Port for publishing domain events.
#[async_trait]
pub trait EventPublisherPort: Send + Sync {
    /// Publish order events.
    async fn publish_order_events(&self, events: Vec<OrderEvent>) -> Result<(), EventPublishError>;

    /// Publish a single order event.
    async fn publish_order_event(&self, event: OrderEvent) -> Result<(), EventPublishError> {
        self.publish_order_events(vec![event]).await
    }
}

/// No-op event publisher for testing.
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisherPort for NoOpEventPublisher {
    async fn publish_order_events(
        &self,
        _events: Vec<OrderEvent>,
    ) -> Result<(), EventPublishError> {
        Ok(())
    }
}
