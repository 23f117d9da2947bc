//! Update Order Status Use Case

use std::sync::Arc;

use crate::application::dto::OrderStatusViewDto;
use crate::application::errors::UseCaseError;
use crate::application::ports::{ContactDirectoryPort, EventPublisherPort};
use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::order_fulfillment::repository::OrderRepository;
use crate::domain::order_fulfillment::value_objects::OrderStatus;
use crate::domain::shared::{OrderId, RestaurantId};

/// Use case for moving an order through its lifecycle.
pub struct UpdateOrderStatusUseCase<O, D, E>
where
    O: OrderRepository,
    D: ContactDirectoryPort,
    E: EventPublisherPort,
{
    order_repo: Arc<O>,
    directory: Arc<D>,
    event_publisher: Arc<E>,
}

impl<O, D, E> UpdateOrderStatusUseCase<O, D, E>
where
    O: OrderRepository,
    D: ContactDirectoryPort,
    E: EventPublisherPort,
{
    /// Create a new `UpdateOrderStatusUseCase`.
    pub const fn new(order_repo: Arc<O>, directory: Arc<D>, event_publisher: Arc<E>) -> Self {
        Self {
            order_repo,
            directory,
            event_publisher,
        }
    }

    /// Apply a status change requested by the owning restaurant.
    ///
    /// The write is conditional on the version that was loaded. Events are
    /// published after the write; their delivery never affects the result.
    ///
    /// # Errors
    ///
    /// `InvalidStatus`, `NotFound`, `NotOwner`, `InvalidStateTransition` or
    /// `VersionConflict`.
    pub async fn execute(
        &self,
        restaurant_id: &RestaurantId,
        order_id: &OrderId,
        requested_status: &str,
    ) -> Result<OrderStatusViewDto, UseCaseError> {
        let next: OrderStatus = requested_status.trim().parse()?;

        let mut order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_id: order_id.to_string(),
            })?;

        if order.restaurant_id() != restaurant_id {
            return Err(OrderError::NotOwner {
                order_id: order_id.to_string(),
            }
            .into());
        }

        let expected_version = order.version();
        let previous = order.status();
        order.transition_to(next)?;
        self.order_repo.update(&order, expected_version).await?;

        tracing::info!(
            order_id = %order_id,
            from = %previous,
            to = %next,
            is_active = order.is_active(),
            "Order status updated"
        );

        let events = order.drain_events();
        if let Err(e) = self.event_publisher.publish_order_events(events).await {
            tracing::error!(order_id = %order_id, error = %e, "Failed to publish order events");
        }

        let user = match self.directory.find_user(order.user_id()).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(order_id = %order_id, error = %e, "Customer lookup failed");
                None
            }
        };

        Ok(OrderStatusViewDto::from_order(&order, user.as_ref()))
    }
}
