//! In-memory contact directory, seeded at startup.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::ports::{
    ContactDirectoryPort, DirectoryError, RestaurantContact, UserContact,
};
use crate::domain::shared::{RestaurantId, UserId};

/// In-memory implementation of `ContactDirectoryPort`.
#[derive(Debug, Default)]
pub struct InMemoryContactDirectory {
    users: RwLock<HashMap<UserId, UserContact>>,
    restaurants: RwLock<HashMap<RestaurantId, RestaurantContact>>,
}

impl InMemoryContactDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a diner profile.
    pub fn add_user(&self, user: UserContact) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.id.clone(), user);
    }

    /// Add or replace a restaurant profile.
    pub fn add_restaurant(&self, restaurant: RestaurantContact) {
        self.restaurants
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(restaurant.id.clone(), restaurant);
    }
}

#[async_trait]
impl ContactDirectoryPort for InMemoryContactDirectory {
    async fn find_user(&self, user_id: &UserId) -> Result<Option<UserContact>, DirectoryError> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.get(user_id).cloned())
    }

    async fn find_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Option<RestaurantContact>, DirectoryError> {
        let restaurants = self
            .restaurants
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(restaurants.get(restaurant_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_seeded_profiles() {
        let directory = InMemoryContactDirectory::new();
        directory.add_user(UserContact {
            id: UserId::new("user-1"),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
        });
        directory.add_restaurant(RestaurantContact {
            id: RestaurantId::new("rest-1"),
            name: "Spice Route".to_string(),
            email: "kitchen@spiceroute.example".to_string(),
            phone: None,
            location: None,
        });

        let user = directory.find_user(&UserId::new("user-1")).await.unwrap();
        let restaurant = directory
            .find_restaurant(&RestaurantId::new("rest-1"))
            .await
            .unwrap();

        assert_eq!(user.map(|u| u.name), Some("Asha".to_string()));
        assert_eq!(restaurant.map(|r| r.name), Some("Spice Route".to_string()));
    }

    #[tokio::test]
    async fn unknown_profile_is_none() {
        let directory = InMemoryContactDirectory::new();
        assert!(directory
            .find_user(&UserId::new("ghost"))
            .await
            .unwrap()
            .is_none());
    }
}
