//! A requested (menu item, quantity) pair.

use serde::{Deserialize, Serialize};

use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::shared::MenuItemId;

/// One line of an order request, before pricing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemSelection {
    menu_item_id: MenuItemId,
    quantity: u32,
}

impl ItemSelection {
    /// Create a selection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` if the id is blank or the quantity is zero.
    pub fn new(menu_item_id: MenuItemId, quantity: u32) -> Result<Self, OrderError> {
        if menu_item_id.is_blank() || quantity == 0 {
            return Err(OrderError::InvalidQuantity {
                menu_item_id: menu_item_id.into_inner(),
                quantity: i64::from(quantity),
            });
        }
        Ok(Self {
            menu_item_id,
            quantity,
        })
    }

    /// Menu item id.
    #[must_use]
    pub const fn menu_item_id(&self) -> &MenuItemId {
        &self.menu_item_id
    }

    /// Quantity, at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_quantity() {
        let s = ItemSelection::new(MenuItemId::new("item-a"), 2).unwrap();
        assert_eq!(s.menu_item_id().as_str(), "item-a");
        assert_eq!(s.quantity(), 2);
    }

    #[test]
    fn rejects_zero_quantity() {
        let err = ItemSelection::new(MenuItemId::new("item-a"), 0).unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity { quantity: 0, .. }));
    }

    #[test]
    fn rejects_blank_id() {
        assert!(ItemSelection::new(MenuItemId::new(" "), 1).is_err());
    }
}
