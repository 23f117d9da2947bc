//! Priced line item captured at order creation.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{MenuItemId, Money};

/// One line of a placed order.
///
/// Name and unit price are copied from the catalog when the order is
/// placed and never change afterwards, even if the menu does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    menu_item_id: MenuItemId,
    name: String,
    quantity: u32,
    unit_price: Money,
}

impl OrderLine {
    /// Create a new order line.
    #[must_use]
    pub fn new(
        menu_item_id: MenuItemId,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            menu_item_id,
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Get the menu item ID.
    #[must_use]
    pub const fn menu_item_id(&self) -> &MenuItemId {
        &self.menu_item_id
    }

    /// Menu item name at the time of ordering.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price at the time of ordering.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let line = OrderLine::new(MenuItemId::new("item-a"), "Paneer Tikka", 3, Money::new(dec!(12.50)));
        assert_eq!(line.line_total(), Money::new(dec!(37.50)));
        assert_eq!(line.name(), "Paneer Tikka");
    }
}
