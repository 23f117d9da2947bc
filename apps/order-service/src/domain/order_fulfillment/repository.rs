//! Order Repository Trait
//!
//! Defines the persistence abstraction for orders.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Order;
use super::errors::OrderError;
use crate::domain::shared::{OrderId, RestaurantId, UserId};

/// Repository trait for Order persistence.
///
/// Writes are conditional: inserts refuse duplicates of a blocking order and
/// updates refuse stale versions. Both checks must be atomic with the write.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a newly placed order unless an equivalent blocking order exists.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateOrder` carrying the existing order's id, or
    /// `Storage` if persistence fails.
    async fn insert_unless_duplicate(&self, order: &Order) -> Result<(), OrderError>;

    /// Replace a stored order, provided it is still at `expected_version`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist, `VersionConflict` if it
    /// was modified since it was loaded, or `Storage` if persistence fails.
    async fn update(&self, order: &Order, expected_version: u64) -> Result<(), OrderError>;

    /// Find an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// All orders placed by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError>;

    /// Orders of a restaurant with the given activity flag, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
        active: bool,
    ) -> Result<Vec<Order>, OrderError>;
}
