//! Catalog Port (Driven Port)
//!
//! Read-only lookup of menu items owned by the catalog store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{MenuItemId, Money, RestaurantId};

/// A menu item as the catalog store knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Menu item ID.
    pub id: MenuItemId,
    /// Owning restaurant.
    pub restaurant_id: RestaurantId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: Money,
    /// Whether the item can currently be ordered.
    pub is_available: bool,
}

/// Catalog lookup error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Catalog store could not be reached.
    #[error("Catalog connection error: {message}")]
    ConnectionError { message: String },

    /// Lookup failed.
    #[error("Catalog lookup failed: {message}")]
    LookupFailed { message: String },
}

/// Port for resolving menu items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Look up a menu item scoped to a restaurant.
    ///
    /// Returns `None` if the item does not exist or belongs to another restaurant.
    async fn find_menu_item(
        &self,
        restaurant_id: &RestaurantId,
        menu_item_id: &MenuItemId,
    ) -> Result<Option<CatalogItem>, CatalogError>;
}
