//! In-memory order repository.
//!
//! The duplicate check and the version check run under the same write lock
//! as the write they guard.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::order_fulfillment::aggregate::Order;
use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::order_fulfillment::repository::OrderRepository;
use crate::domain::order_fulfillment::services::{DuplicateOrderGuard, OrderFingerprint};
use crate::domain::shared::{OrderId, RestaurantId, UserId};

/// In-memory implementation of `OrderRepository`.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<OrderId, Order>> {
        self.orders.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<OrderId, Order>> {
        self.orders.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn stored(order: &Order) -> Order {
        let mut stored = order.clone();
        stored.drain_events();
        stored
    }

    fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
        orders.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        orders
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert_unless_duplicate(&self, order: &Order) -> Result<(), OrderError> {
        let fingerprint = OrderFingerprint::of_order(order);
        let mut orders = self.write();

        if let Some(existing) = DuplicateOrderGuard::find_duplicate(&fingerprint, orders.values()) {
            return Err(OrderError::DuplicateOrder {
                existing_order_id: existing.id().to_string(),
            });
        }
        if orders.contains_key(order.id()) {
            return Err(OrderError::Storage {
                message: format!("Order {} already stored", order.id()),
            });
        }

        orders.insert(order.id().clone(), Self::stored(order));
        Ok(())
    }

    async fn update(&self, order: &Order, expected_version: u64) -> Result<(), OrderError> {
        let mut orders = self.write();
        let current = orders.get(order.id()).ok_or_else(|| OrderError::NotFound {
            order_id: order.id().to_string(),
        })?;

        if current.version() != expected_version {
            return Err(OrderError::VersionConflict {
                order_id: order.id().to_string(),
                expected: expected_version,
                actual: current.version(),
            });
        }

        orders.insert(order.id().clone(), Self::stored(order));
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        Ok(self.read().get(id).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self
            .read()
            .values()
            .filter(|o| o.user_id() == user_id)
            .cloned()
            .collect();
        Ok(Self::newest_first(orders))
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
        active: bool,
    ) -> Result<Vec<Order>, OrderError> {
        let orders = self
            .read()
            .values()
            .filter(|o| o.restaurant_id() == restaurant_id && o.is_active() == active)
            .cloned()
            .collect();
        Ok(Self::newest_first(orders))
    }
}
