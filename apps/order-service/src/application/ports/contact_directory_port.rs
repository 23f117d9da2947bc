//! Contact Directory Port (Driven Port)
//!
//! Profile lookup for the two principal roles, owned by the identity provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{RestaurantId, UserId};

/// Diner profile fields needed for notifications and order views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContact {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Restaurant profile fields needed for notifications and order views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantContact {
    /// Restaurant ID.
    pub id: RestaurantId,
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Street address.
    #[serde(default)]
    pub location: Option<String>,
}

/// Directory lookup error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DirectoryError {
    /// Directory could not be reached.
    #[error("Directory connection error: {message}")]
    ConnectionError { message: String },

    /// Lookup failed.
    #[error("Directory lookup failed: {message}")]
    LookupFailed { message: String },
}

/// Port for resolving principal profiles.
#[async_trait]
pub trait ContactDirectoryPort: Send + Sync {
    /// Look up a diner.
    async fn find_user(&self, user_id: &UserId) -> Result<Option<UserContact>, DirectoryError>;

    /// Look up a restaurant.
    async fn find_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Option<RestaurantContact>, DirectoryError>;
}
