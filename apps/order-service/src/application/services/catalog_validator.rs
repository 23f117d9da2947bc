//! Catalog Validator
//!
//! Resolves requested items against the catalog and prices them.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::application::errors::UseCaseError;
use crate::application::ports::CatalogPort;
use crate::domain::order_fulfillment::aggregate::OrderLine;
use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::order_fulfillment::value_objects::ItemSelection;
use crate::domain::shared::RestaurantId;

/// Turns (item, quantity) selections into priced order lines.
pub struct CatalogValidator<C>
where
    C: CatalogPort,
{
    catalog: Arc<C>,
}

impl<C> CatalogValidator<C>
where
    C: CatalogPort,
{
    /// Create a new `CatalogValidator`.
    pub const fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Price every selection, preserving input order.
    ///
    /// Lookups run concurrently; the first failure wins.
    ///
    /// # Errors
    ///
    /// `ItemNotFound` for unknown or cross-restaurant items, `ItemUnavailable`
    /// for items switched off, `Catalog` if the store fails.
    pub async fn price(
        &self,
        restaurant_id: &RestaurantId,
        selections: &[ItemSelection],
    ) -> Result<Vec<OrderLine>, UseCaseError> {
        let lookups = selections
            .iter()
            .map(|selection| self.price_one(restaurant_id, selection));
        try_join_all(lookups).await
    }

    async fn price_one(
        &self,
        restaurant_id: &RestaurantId,
        selection: &ItemSelection,
    ) -> Result<OrderLine, UseCaseError> {
        let item = self
            .catalog
            .find_menu_item(restaurant_id, selection.menu_item_id())
            .await?
            .filter(|item| item.restaurant_id == *restaurant_id)
            .ok_or_else(|| OrderError::ItemNotFound {
                menu_item_id: selection.menu_item_id().to_string(),
                restaurant_id: restaurant_id.to_string(),
            })?;

        if !item.is_available {
            return Err(OrderError::ItemUnavailable {
                menu_item_id: item.id.to_string(),
            }
            .into());
        }

        Ok(OrderLine::new(
            item.id,
            item.name,
            selection.quantity(),
            item.price,
        ))
    }
}
