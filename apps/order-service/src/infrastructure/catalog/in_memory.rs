//! In-memory menu catalog, seeded at startup.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::ports::{CatalogError, CatalogItem, CatalogPort};
use crate::domain::shared::{MenuItemId, RestaurantId};

/// In-memory implementation of `CatalogPort`.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: RwLock<HashMap<MenuItemId, CatalogItem>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `items`.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let catalog = Self::new();
        for item in items {
            catalog.upsert(item);
        }
        catalog
    }

    /// Add or replace a menu item.
    pub fn upsert(&self, item: CatalogItem) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(item.id.clone(), item);
    }

    /// Number of menu items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CatalogPort for InMemoryCatalog {
    async fn find_menu_item(
        &self,
        restaurant_id: &RestaurantId,
        menu_item_id: &MenuItemId,
    ) -> Result<Option<CatalogItem>, CatalogError> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items
            .get(menu_item_id)
            .filter(|item| &item.restaurant_id == restaurant_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;
    use rust_decimal_macros::dec;

    fn biryani() -> CatalogItem {
        CatalogItem {
            id: MenuItemId::new("item-1"),
            restaurant_id: RestaurantId::new("rest-1"),
            name: "Biryani".to_string(),
            price: Money::new(dec!(12.50)),
            is_available: true,
        }
    }

    #[tokio::test]
    async fn finds_item_of_restaurant() {
        let catalog = InMemoryCatalog::with_items([biryani()]);

        let found = catalog
            .find_menu_item(&RestaurantId::new("rest-1"), &MenuItemId::new("item-1"))
            .await
            .unwrap();

        assert_eq!(found, Some(biryani()));
    }

    #[tokio::test]
    async fn item_of_other_restaurant_is_hidden() {
        let catalog = InMemoryCatalog::with_items([biryani()]);

        let found = catalog
            .find_menu_item(&RestaurantId::new("rest-2"), &MenuItemId::new("item-1"))
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn upsert_replaces_price() {
        let catalog = InMemoryCatalog::with_items([biryani()]);
        catalog.upsert(CatalogItem {
            price: Money::new(dec!(14)),
            ..biryani()
        });

        let found = catalog
            .find_menu_item(&RestaurantId::new("rest-1"), &MenuItemId::new("item-1"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(found.price, Money::new(dec!(14)));
    }
}
