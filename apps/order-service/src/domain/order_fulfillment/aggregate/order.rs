//! Order Aggregate Root
//!
//! The Order aggregate owns pricing, status and the paid flag of one placed
//! order. Status changes go through [`OrderStateMachine`] and every mutation
//! bumps `version` and records one domain event.

use serde::{Deserialize, Serialize};

use super::OrderLine;
use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::order_fulfillment::events::{
    OrderCancelled, OrderCompleted, OrderEvent, OrderPlaced, OrderStatusChanged, PaymentConfirmed,
};
use crate::domain::order_fulfillment::services::OrderStateMachine;
use crate::domain::order_fulfillment::value_objects::{
    Fulfillment, OrderStatus, OrderType, PaymentMethod,
};
use crate::domain::shared::{
    GatewayOrderId, GatewayPaymentId, Money, OrderId, RestaurantId, Timestamp, UserId,
};

/// Parameters for reconstituting an Order from storage.
///
/// No domain events are generated during reconstitution.
#[derive(Debug, Clone)]
pub struct ReconstitutedOrderParams {
    /// Order identifier.
    pub id: OrderId,
    /// Ordering diner.
    pub user_id: UserId,
    /// Restaurant.
    pub restaurant_id: RestaurantId,
    /// Order-type specific details.
    pub fulfillment: Fulfillment,
    /// Current status.
    pub status: OrderStatus,
    /// Total fixed at creation.
    pub total_amount: Money,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Paid flag.
    pub is_paid: bool,
    /// Gateway intent bound to this order.
    pub gateway_order_id: Option<GatewayOrderId>,
    /// Priced line items.
    pub lines: Vec<OrderLine>,
    /// Optimistic concurrency version.
    pub version: u64,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Last update timestamp.
    pub updated_at: Timestamp,
}

/// Command to place a new order.
///
/// Lines are already priced and fulfillment already resolved by the
/// catalog validator and order type policy.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    /// Ordering diner.
    pub user_id: UserId,
    /// Restaurant.
    pub restaurant_id: RestaurantId,
    /// Order-type specific details.
    pub fulfillment: Fulfillment,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Priced line items, in request order.
    pub lines: Vec<OrderLine>,
}

/// Order Aggregate Root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    restaurant_id: RestaurantId,
    fulfillment: Fulfillment,
    status: OrderStatus,
    total_amount: Money,
    payment_method: PaymentMethod,
    is_paid: bool,
    gateway_order_id: Option<GatewayOrderId>,
    lines: Vec<OrderLine>,
    version: u64,
    #[serde(skip)]
    events: Vec<OrderEvent>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Order {
    /// Version of a freshly placed order.
    pub const INITIAL_VERSION: u64 = 1;

    /// Place a new order in `PENDING`.
    ///
    /// The total is computed once here from the line snapshots.
    /// Generates an `OrderPlaced` event.
    ///
    /// # Errors
    ///
    /// Returns `EmptyOrder` if there are no lines, `InvalidQuantity` if a line
    /// has quantity zero.
    pub fn place(cmd: PlaceOrderCommand) -> Result<Self, OrderError> {
        if cmd.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if let Some(line) = cmd.lines.iter().find(|l| l.quantity() == 0) {
            return Err(OrderError::InvalidQuantity {
                menu_item_id: line.menu_item_id().to_string(),
                quantity: 0,
            });
        }

        let id = OrderId::generate();
        let now = Timestamp::now();
        let total_amount: Money = cmd.lines.iter().map(OrderLine::line_total).sum();

        let mut order = Self {
            id: id.clone(),
            user_id: cmd.user_id.clone(),
            restaurant_id: cmd.restaurant_id.clone(),
            fulfillment: cmd.fulfillment,
            status: OrderStatus::Pending,
            total_amount,
            payment_method: cmd.payment_method,
            is_paid: false,
            gateway_order_id: None,
            lines: cmd.lines,
            version: Self::INITIAL_VERSION,
            events: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        order.events.push(OrderEvent::Placed(OrderPlaced {
            order_id: id,
            user_id: cmd.user_id,
            restaurant_id: cmd.restaurant_id,
            order_type: order.order_type(),
            total_amount,
            occurred_at: now,
        }));

        Ok(order)
    }

    /// Reconstitute an order from stored state (no events generated).
    #[must_use]
    pub fn reconstitute(params: ReconstitutedOrderParams) -> Self {
        Self {
            id: params.id,
            user_id: params.user_id,
            restaurant_id: params.restaurant_id,
            fulfillment: params.fulfillment,
            status: params.status,
            total_amount: params.total_amount,
            payment_method: params.payment_method,
            is_paid: params.is_paid,
            gateway_order_id: params.gateway_order_id,
            lines: params.lines,
            version: params.version,
            events: Vec::new(),
            created_at: params.created_at,
            updated_at: params.updated_at,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the order ID.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the ordering user's ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Get the restaurant ID.
    #[must_use]
    pub const fn restaurant_id(&self) -> &RestaurantId {
        &self.restaurant_id
    }

    /// Get the order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.fulfillment.order_type()
    }

    /// Get the fulfillment details.
    #[must_use]
    pub const fn fulfillment(&self) -> &Fulfillment {
        &self.fulfillment
    }

    /// Delivery address, for delivery orders.
    #[must_use]
    pub fn delivery_address(&self) -> Option<&str> {
        self.fulfillment.delivery_address()
    }

    /// Meal time, for dine-in orders.
    #[must_use]
    pub const fn meal_time(&self) -> Option<Timestamp> {
        self.fulfillment.meal_time()
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// True until the order is completed or cancelled.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        OrderStateMachine::is_active(self.status)
    }

    /// Get the total amount.
    #[must_use]
    pub const fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Get the payment method.
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Whether a verified payment has been recorded.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.is_paid
    }

    /// Gateway intent bound to this order, if one was created.
    #[must_use]
    pub const fn gateway_order_id(&self) -> Option<&GatewayOrderId> {
        self.gateway_order_id.as_ref()
    }

    /// Get the line items.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Get the concurrency version.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Move the order to `next`.
    ///
    /// Generates `OrderStatusChanged`, `OrderCompleted` or `OrderCancelled`
    /// depending on the target status.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the edge is not in the transition table.
    pub fn transition_to(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        OrderStateMachine::validate_transition(self.status, next)?;

        let previous = self.status;
        self.status = next;
        self.touch();

        let event = match next {
            OrderStatus::Completed => OrderEvent::Completed(OrderCompleted {
                order_id: self.id.clone(),
                user_id: self.user_id.clone(),
                occurred_at: self.updated_at,
            }),
            OrderStatus::Cancelled => OrderEvent::Cancelled(OrderCancelled {
                order_id: self.id.clone(),
                user_id: self.user_id.clone(),
                previous_status: previous,
                occurred_at: self.updated_at,
            }),
            OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::Ready => {
                OrderEvent::StatusChanged(OrderStatusChanged {
                    order_id: self.id.clone(),
                    from: previous,
                    to: next,
                    occurred_at: self.updated_at,
                })
            }
        };
        self.events.push(event);

        Ok(())
    }

    /// Bind a gateway payment intent to this order.
    ///
    /// A later intent replaces an earlier unpaid one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if the order is already paid.
    pub fn attach_payment_intent(
        &mut self,
        gateway_order_id: GatewayOrderId,
    ) -> Result<(), OrderError> {
        if self.is_paid {
            return Err(OrderError::InvalidParameters {
                field: "orderId".to_string(),
                message: format!("Order {} is already paid", self.id),
            });
        }
        self.gateway_order_id = Some(gateway_order_id);
        self.touch();
        Ok(())
    }

    /// Mark the order paid after the gateway signature was verified.
    ///
    /// Returns `false` without changes if the order was already paid with
    /// this intent. Generates a `PaymentConfirmed` event otherwise.
    ///
    /// # Errors
    ///
    /// Returns `PaymentOrderMismatch` if `gateway_order_id` is not the intent
    /// bound to this order.
    pub fn confirm_payment(
        &mut self,
        gateway_order_id: &GatewayOrderId,
        gateway_payment_id: GatewayPaymentId,
    ) -> Result<bool, OrderError> {
        if self.gateway_order_id.as_ref() != Some(gateway_order_id) {
            return Err(OrderError::PaymentOrderMismatch {
                order_id: self.id.to_string(),
            });
        }
        if self.is_paid {
            return Ok(false);
        }

        self.is_paid = true;
        self.touch();

        self.events.push(OrderEvent::PaymentConfirmed(PaymentConfirmed {
            order_id: self.id.clone(),
            gateway_order_id: gateway_order_id.clone(),
            gateway_payment_id,
            occurred_at: self.updated_at,
        }));

        Ok(true)
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Timestamp::now();
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Drain accumulated domain events.
    pub fn drain_events(&mut self) -> Vec<OrderEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::MenuItemId;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn delivery() -> Fulfillment {
        Fulfillment::HomeDelivery {
            delivery_address: "12 MG Road".to_string(),
        }
    }

    fn command(lines: Vec<OrderLine>) -> PlaceOrderCommand {
        PlaceOrderCommand {
            user_id: UserId::new("user-1"),
            restaurant_id: RestaurantId::new("rest-1"),
            fulfillment: delivery(),
            payment_method: PaymentMethod::default(),
            lines,
        }
    }

    fn sample_order() -> Order {
        Order::place(command(vec![
            OrderLine::new(MenuItemId::new("item-a"), "Dosa", 2, Money::new(dec!(10))),
            OrderLine::new(MenuItemId::new("item-b"), "Lassi", 1, Money::new(dec!(5))),
        ]))
        .unwrap()
    }

    #[test]
    fn place_prices_lines_and_starts_pending() {
        let order = sample_order();

        assert_eq!(order.total_amount(), Money::new(dec!(25)));
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.is_active());
        assert!(!order.is_paid());
        assert_eq!(order.version(), Order::INITIAL_VERSION);
        assert_eq!(order.payment_method(), PaymentMethod::OnlinePayment);
        assert_eq!(order.order_type(), OrderType::HomeDelivery);
        assert_eq!(order.delivery_address(), Some("12 MG Road"));
        assert!(order.meal_time().is_none());
    }

    #[test]
    fn place_records_placed_event() {
        let mut order = sample_order();
        let events = order.drain_events();

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], OrderEvent::Placed(_)));
        assert!(order.drain_events().is_empty());
    }

    #[test]
    fn place_rejects_empty_order() {
        let err = Order::place(command(vec![])).unwrap_err();
        assert_eq!(err, OrderError::EmptyOrder);
    }

    #[test]
    fn full_lifecycle_bumps_version_and_emits_one_event_per_step() {
        let mut order = sample_order();
        order.drain_events();

        order.transition_to(OrderStatus::Preparing).unwrap();
        order.transition_to(OrderStatus::Ready).unwrap();
        order.transition_to(OrderStatus::Completed).unwrap();

        assert_eq!(order.version(), 4);
        assert!(!order.is_active());

        let events = order.drain_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], OrderEvent::StatusChanged(_)));
        assert!(matches!(events[1], OrderEvent::StatusChanged(_)));
        assert!(matches!(events[2], OrderEvent::Completed(_)));
    }

    #[test]
    fn cancel_records_previous_status() {
        let mut order = sample_order();
        order.drain_events();
        order.transition_to(OrderStatus::Preparing).unwrap();
        order.transition_to(OrderStatus::Cancelled).unwrap();

        let events = order.drain_events();
        match &events[1] {
            OrderEvent::Cancelled(e) => assert_eq!(e.previous_status, OrderStatus::Preparing),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(!order.is_active());
    }

    #[test]
    fn illegal_transition_leaves_order_untouched() {
        let mut order = sample_order();
        order.drain_events();

        let err = order.transition_to(OrderStatus::Completed).unwrap_err();
        assert!(matches!(err, OrderError::InvalidStateTransition { .. }));
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.version(), Order::INITIAL_VERSION);
        assert!(order.drain_events().is_empty());
    }

    #[test]
    fn confirm_payment_requires_bound_intent() {
        let mut order = sample_order();

        let err = order
            .confirm_payment(&GatewayOrderId::new("order_X"), GatewayPaymentId::new("pay_1"))
            .unwrap_err();
        assert!(matches!(err, OrderError::PaymentOrderMismatch { .. }));

        order
            .attach_payment_intent(GatewayOrderId::new("order_A"))
            .unwrap();
        let err = order
            .confirm_payment(&GatewayOrderId::new("order_X"), GatewayPaymentId::new("pay_1"))
            .unwrap_err();
        assert!(matches!(err, OrderError::PaymentOrderMismatch { .. }));
        assert!(!order.is_paid());
    }

    #[test]
    fn confirm_payment_is_idempotent() {
        let mut order = sample_order();
        order.drain_events();
        let intent = GatewayOrderId::new("order_A");
        order.attach_payment_intent(intent.clone()).unwrap();

        assert!(order
            .confirm_payment(&intent, GatewayPaymentId::new("pay_1"))
            .unwrap());
        let version = order.version();
        assert!(!order
            .confirm_payment(&intent, GatewayPaymentId::new("pay_1"))
            .unwrap());

        assert!(order.is_paid());
        assert_eq!(order.version(), version);
        assert_eq!(order.drain_events().len(), 1);
    }

    #[test]
    fn paid_order_rejects_new_intent() {
        let mut order = sample_order();
        let intent = GatewayOrderId::new("order_A");
        order.attach_payment_intent(intent.clone()).unwrap();
        order
            .confirm_payment(&intent, GatewayPaymentId::new("pay_1"))
            .unwrap();

        assert!(order
            .attach_payment_intent(GatewayOrderId::new("order_B"))
            .is_err());
        assert_eq!(order.gateway_order_id(), Some(&intent));
    }

    #[test]
    fn reconstitute_emits_no_events() {
        let original = sample_order();
        let mut restored = Order::reconstitute(ReconstitutedOrderParams {
            id: original.id().clone(),
            user_id: original.user_id().clone(),
            restaurant_id: original.restaurant_id().clone(),
            fulfillment: original.fulfillment().clone(),
            status: OrderStatus::Ready,
            total_amount: original.total_amount(),
            payment_method: original.payment_method(),
            is_paid: true,
            gateway_order_id: Some(GatewayOrderId::new("order_A")),
            lines: original.lines().to_vec(),
            version: 7,
            created_at: original.created_at(),
            updated_at: original.updated_at(),
        });

        assert_eq!(restored.status(), OrderStatus::Ready);
        assert_eq!(restored.version(), 7);
        assert!(restored.drain_events().is_empty());
    }

    proptest! {
        #[test]
        fn total_is_sum_of_price_times_quantity(
            items in proptest::collection::vec((1u32..20, 1i64..100_000), 1..8)
        ) {
            let lines: Vec<OrderLine> = items
                .iter()
                .enumerate()
                .map(|(i, (qty, cents))| {
                    OrderLine::new(
                        MenuItemId::new(format!("item-{i}")),
                        format!("Item {i}"),
                        *qty,
                        Money::from_minor_units(*cents),
                    )
                })
                .collect();
            let expected: Decimal = items
                .iter()
                .map(|(qty, cents)| Decimal::new(*cents, 2) * Decimal::from(*qty))
                .sum();

            let order = Order::place(command(lines)).unwrap();
            prop_assert_eq!(order.total_amount().amount(), expected);
        }
    }
}
