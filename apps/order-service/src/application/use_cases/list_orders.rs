//! List Orders Use Case
//!
//! Read-only views of a diner's history and a restaurant's queue. Missing
//! profiles degrade to empty name fields; an empty listing is not an error.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::{RestaurantOrderSummaryDto, UserOrderSummaryDto};
use crate::application::errors::UseCaseError;
use crate::application::ports::{ContactDirectoryPort, RestaurantContact, UserContact};
use crate::domain::order_fulfillment::repository::OrderRepository;
use crate::domain::shared::{RestaurantId, UserId};

/// Use case for order listings.
pub struct ListOrdersUseCase<O, D>
where
    O: OrderRepository,
    D: ContactDirectoryPort,
{
    order_repo: Arc<O>,
    directory: Arc<D>,
}

impl<O, D> ListOrdersUseCase<O, D>
where
    O: OrderRepository,
    D: ContactDirectoryPort,
{
    /// Create a new `ListOrdersUseCase`.
    pub const fn new(order_repo: Arc<O>, directory: Arc<D>) -> Self {
        Self {
            order_repo,
            directory,
        }
    }

    /// Every order the user placed, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the repository query fails.
    pub async fn for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserOrderSummaryDto>, UseCaseError> {
        let orders = self.order_repo.find_by_user(user_id).await?;

        let mut restaurants: HashMap<RestaurantId, Option<RestaurantContact>> = HashMap::new();
        let mut summaries = Vec::with_capacity(orders.len());
        for order in &orders {
            if !restaurants.contains_key(order.restaurant_id()) {
                let contact = self.restaurant(order.restaurant_id()).await;
                restaurants.insert(order.restaurant_id().clone(), contact);
            }
            let restaurant = restaurants.get(order.restaurant_id()).and_then(Option::as_ref);
            summaries.push(UserOrderSummaryDto::from_order(order, restaurant));
        }

        Ok(summaries)
    }

    /// The restaurant's active or closed orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the repository query fails.
    pub async fn for_restaurant(
        &self,
        restaurant_id: &RestaurantId,
        active: bool,
    ) -> Result<Vec<RestaurantOrderSummaryDto>, UseCaseError> {
        let orders = self
            .order_repo
            .find_by_restaurant(restaurant_id, active)
            .await?;

        let mut users: HashMap<UserId, Option<UserContact>> = HashMap::new();
        let mut summaries = Vec::with_capacity(orders.len());
        for order in &orders {
            if !users.contains_key(order.user_id()) {
                let contact = self.user(order.user_id()).await;
                users.insert(order.user_id().clone(), contact);
            }
            let user = users.get(order.user_id()).and_then(Option::as_ref);
            summaries.push(RestaurantOrderSummaryDto::from_order(order, user));
        }

        Ok(summaries)
    }

    async fn restaurant(&self, restaurant_id: &RestaurantId) -> Option<RestaurantContact> {
        match self.directory.find_restaurant(restaurant_id).await {
            Ok(contact) => contact,
            Err(e) => {
                tracing::warn!(restaurant_id = %restaurant_id, error = %e, "Restaurant lookup failed");
                None
            }
        }
    }

    async fn user(&self, user_id: &UserId) -> Option<UserContact> {
        match self.directory.find_user(user_id).await {
            Ok(contact) => contact,
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "User lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_fulfillment::aggregate::{Order, OrderLine, PlaceOrderCommand};
    use crate::domain::order_fulfillment::value_objects::{
        Fulfillment, OrderStatus, PaymentMethod,
    };
    use crate::domain::shared::{MenuItemId, Money};
    use crate::infrastructure::directory::InMemoryContactDirectory;
    use crate::infrastructure::persistence::InMemoryOrderRepository;
    use rust_decimal_macros::dec;

    fn order(user: &str, restaurant: &str, item: &str) -> Order {
        Order::place(PlaceOrderCommand {
            user_id: UserId::new(user),
            restaurant_id: RestaurantId::new(restaurant),
            fulfillment: Fulfillment::HomeDelivery {
                delivery_address: "12 MG Road".to_string(),
            },
            payment_method: PaymentMethod::CashOnDelivery,
            lines: vec![OrderLine::new(
                MenuItemId::new(item),
                "Dosa",
                1,
                Money::new(dec!(4)),
            )],
        })
        .unwrap()
    }

    fn directory() -> InMemoryContactDirectory {
        let directory = InMemoryContactDirectory::new();
        directory.add_user(UserContact {
            id: UserId::new("user-1"),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: Some("+91 98450 00000".to_string()),
        });
        directory.add_restaurant(RestaurantContact {
            id: RestaurantId::new("rest-1"),
            name: "Spice Route".to_string(),
            email: "kitchen@spiceroute.example".to_string(),
            phone: None,
            location: Some("4 Brigade Road".to_string()),
        });
        directory
    }

    #[tokio::test]
    async fn user_history_carries_restaurant_details() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        repo.insert_unless_duplicate(&order("user-1", "rest-1", "a"))
            .await
            .unwrap();
        repo.insert_unless_duplicate(&order("user-1", "rest-2", "b"))
            .await
            .unwrap();
        let use_case = ListOrdersUseCase::new(repo, Arc::new(directory()));

        let summaries = use_case.for_user(&UserId::new("user-1")).await.unwrap();

        assert_eq!(summaries.len(), 2);
        let known = summaries
            .iter()
            .find(|s| s.restaurant_name.is_some())
            .unwrap();
        assert_eq!(known.restaurant_name.as_deref(), Some("Spice Route"));
        assert_eq!(known.restaurant_address.as_deref(), Some("4 Brigade Road"));
        assert!(summaries.iter().any(|s| s.restaurant_name.is_none()));
    }

    #[tokio::test]
    async fn empty_history_is_empty_list() {
        let use_case = ListOrdersUseCase::new(
            Arc::new(InMemoryOrderRepository::new()),
            Arc::new(directory()),
        );
        assert!(use_case
            .for_user(&UserId::new("nobody"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn restaurant_queue_splits_on_activity() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let open = order("user-1", "rest-1", "a");
        let mut closed = order("user-1", "rest-1", "b");
        closed.transition_to(OrderStatus::Cancelled).unwrap();
        repo.insert_unless_duplicate(&open).await.unwrap();
        repo.insert_unless_duplicate(&closed).await.unwrap();
        let use_case = ListOrdersUseCase::new(repo, Arc::new(directory()));
        let restaurant = RestaurantId::new("rest-1");

        let active = use_case.for_restaurant(&restaurant, true).await.unwrap();
        let inactive = use_case.for_restaurant(&restaurant, false).await.unwrap();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].order_id, open.id().to_string());
        assert_eq!(active[0].user_name.as_deref(), Some("Asha"));
        assert_eq!(active[0].phone_number.as_deref(), Some("+91 98450 00000"));
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].status, OrderStatus::Cancelled);
    }
}
