//! Duplicate-order detection.

use std::collections::BTreeMap;

use crate::domain::order_fulfillment::aggregate::Order;
use crate::domain::order_fulfillment::value_objects::{ItemSelection, OrderType};
use crate::domain::shared::{MenuItemId, RestaurantId, UserId};

/// Identity of an order for duplicate detection.
///
/// Line items are folded into a multiset of menu item id to total quantity,
/// so item order and splitting one item over several entries do not matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFingerprint {
    user_id: UserId,
    restaurant_id: RestaurantId,
    order_type: OrderType,
    items: BTreeMap<MenuItemId, u64>,
}

impl OrderFingerprint {
    /// Fingerprint from raw (item, quantity) pairs.
    #[must_use]
    pub fn new<'a>(
        user_id: UserId,
        restaurant_id: RestaurantId,
        order_type: OrderType,
        items: impl IntoIterator<Item = (&'a MenuItemId, u32)>,
    ) -> Self {
        let mut folded: BTreeMap<MenuItemId, u64> = BTreeMap::new();
        for (id, quantity) in items {
            *folded.entry(id.clone()).or_default() += u64::from(quantity);
        }
        Self {
            user_id,
            restaurant_id,
            order_type,
            items: folded,
        }
    }

    /// Fingerprint of an incoming request.
    #[must_use]
    pub fn from_selections(
        user_id: UserId,
        restaurant_id: RestaurantId,
        order_type: OrderType,
        selections: &[ItemSelection],
    ) -> Self {
        Self::new(
            user_id,
            restaurant_id,
            order_type,
            selections.iter().map(|s| (s.menu_item_id(), s.quantity())),
        )
    }

    /// Fingerprint of a stored order.
    #[must_use]
    pub fn of_order(order: &Order) -> Self {
        Self::new(
            order.user_id().clone(),
            order.restaurant_id().clone(),
            order.order_type(),
            order.lines().iter().map(|l| (l.menu_item_id(), l.quantity())),
        )
    }
}

/// Finds an existing order equivalent to a new submission.
pub struct DuplicateOrderGuard;

impl DuplicateOrderGuard {
    /// True if `existing` blocks a new order with `candidate`'s fingerprint.
    ///
    /// Only orders that are still `PENDING` or `PREPARING` block.
    #[must_use]
    pub fn is_duplicate(candidate: &OrderFingerprint, existing: &Order) -> bool {
        existing.status().blocks_duplicates() && OrderFingerprint::of_order(existing) == *candidate
    }

    /// First order in `existing` that blocks the candidate.
    #[must_use]
    pub fn find_duplicate<'a>(
        candidate: &OrderFingerprint,
        existing: impl IntoIterator<Item = &'a Order>,
    ) -> Option<&'a Order> {
        existing
            .into_iter()
            .find(|order| Self::is_duplicate(candidate, order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_fulfillment::aggregate::{OrderLine, PlaceOrderCommand};
    use crate::domain::order_fulfillment::value_objects::{
        Fulfillment, OrderStatus, PaymentMethod,
    };
    use crate::domain::shared::Money;
    use rust_decimal_macros::dec;

    fn line(id: &str, qty: u32) -> OrderLine {
        OrderLine::new(MenuItemId::new(id), id.to_uppercase(), qty, Money::new(dec!(10)))
    }

    fn placed(lines: Vec<OrderLine>) -> Order {
        Order::place(PlaceOrderCommand {
            user_id: UserId::new("user-1"),
            restaurant_id: RestaurantId::new("rest-1"),
            fulfillment: Fulfillment::HomeDelivery {
                delivery_address: "12 MG Road".to_string(),
            },
            payment_method: PaymentMethod::OnlinePayment,
            lines,
        })
        .unwrap()
    }

    fn candidate(items: &[(&str, u32)]) -> OrderFingerprint {
        let selections: Vec<ItemSelection> = items
            .iter()
            .map(|(id, q)| ItemSelection::new(MenuItemId::new(*id), *q).unwrap())
            .collect();
        OrderFingerprint::from_selections(
            UserId::new("user-1"),
            RestaurantId::new("rest-1"),
            OrderType::HomeDelivery,
            &selections,
        )
    }

    #[test]
    fn identical_items_in_any_order_match() {
        let existing = placed(vec![line("a", 2), line("b", 1)]);
        assert!(DuplicateOrderGuard::is_duplicate(
            &candidate(&[("b", 1), ("a", 2)]),
            &existing
        ));
    }

    #[test]
    fn split_entries_fold_into_one_quantity() {
        let existing = placed(vec![line("a", 2)]);
        assert!(DuplicateOrderGuard::is_duplicate(
            &candidate(&[("a", 1), ("a", 1)]),
            &existing
        ));
    }

    #[test]
    fn subset_is_not_a_duplicate() {
        let existing = placed(vec![line("a", 2), line("b", 1)]);
        assert!(!DuplicateOrderGuard::is_duplicate(
            &candidate(&[("a", 2)]),
            &existing
        ));
    }

    #[test]
    fn different_quantity_is_not_a_duplicate() {
        let existing = placed(vec![line("a", 2)]);
        assert!(!DuplicateOrderGuard::is_duplicate(
            &candidate(&[("a", 3)]),
            &existing
        ));
    }

    #[test]
    fn different_order_type_is_not_a_duplicate() {
        let existing = placed(vec![line("a", 2)]);
        let selections = vec![ItemSelection::new(MenuItemId::new("a"), 2).unwrap()];
        let dine_in = OrderFingerprint::from_selections(
            UserId::new("user-1"),
            RestaurantId::new("rest-1"),
            OrderType::DineInAdvance,
            &selections,
        );
        assert!(!DuplicateOrderGuard::is_duplicate(&dine_in, &existing));
    }

    #[test]
    fn only_pending_or_preparing_orders_block() {
        let mut existing = placed(vec![line("a", 2)]);
        let probe = candidate(&[("a", 2)]);

        existing.transition_to(OrderStatus::Preparing).unwrap();
        assert!(DuplicateOrderGuard::is_duplicate(&probe, &existing));

        existing.transition_to(OrderStatus::Ready).unwrap();
        assert!(!DuplicateOrderGuard::is_duplicate(&probe, &existing));
    }

    #[test]
    fn find_duplicate_returns_blocking_order() {
        let other = placed(vec![line("z", 1)]);
        let existing = placed(vec![line("a", 2)]);
        let orders = [other, existing.clone()];
        let found = DuplicateOrderGuard::find_duplicate(&candidate(&[("a", 2)]), &orders).unwrap();
        assert_eq!(found.id(), existing.id());
    }
}
