//! Order fulfillment errors.

use std::fmt;

use super::value_objects::OrderStatus;

/// Failure category, used by adapters to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad or missing input; nothing was written.
    Validation,
    /// Referenced order or menu item does not exist.
    NotFound,
    /// Duplicate submission or concurrent modification.
    Conflict,
    /// Payment signature or binding check failed.
    Security,
    /// Caller is not the party that owns the order.
    Forbidden,
    /// An external collaborator failed or could not be reached.
    Dependency,
    /// Storage failure.
    Internal,
}

/// Errors that can occur while placing or progressing an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Generic invalid request field.
    InvalidParameters {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// No line items were requested.
    EmptyOrder,

    /// A line item has a blank id or a quantity below 1.
    InvalidQuantity {
        /// Menu item id as supplied.
        menu_item_id: String,
        /// Quantity as supplied.
        quantity: i64,
    },

    /// Menu item does not exist or belongs to a different restaurant.
    ItemNotFound {
        /// Menu item id.
        menu_item_id: String,
        /// Restaurant the order was placed with.
        restaurant_id: String,
    },

    /// Menu item exists but is currently not offered.
    ItemUnavailable {
        /// Menu item id.
        menu_item_id: String,
    },

    /// Home delivery without a delivery address.
    MissingDeliveryAddress,

    /// Dine-in order without a meal time.
    MissingMealTime,

    /// Dine-in meal time is not after the moment of ordering.
    MealTimeNotInFuture {
        /// Requested meal time (RFC 3339).
        meal_time: String,
    },

    /// Unrecognized order type.
    InvalidOrderType {
        /// Value as supplied.
        value: String,
    },

    /// Unrecognized payment method.
    InvalidPaymentMethod {
        /// Value as supplied.
        value: String,
    },

    /// Unrecognized order status.
    InvalidStatus {
        /// Value as supplied.
        value: String,
    },

    /// Requested status is not reachable from the current one.
    InvalidStateTransition {
        /// Current order status.
        from: OrderStatus,
        /// Attempted status.
        to: OrderStatus,
        /// Reason for failure.
        reason: String,
    },

    /// An equivalent active order already exists.
    DuplicateOrder {
        /// The order that is already active.
        existing_order_id: String,
    },

    /// Order not found.
    NotFound {
        /// Order ID.
        order_id: String,
    },

    /// Caller does not own the order.
    NotOwner {
        /// Order ID.
        order_id: String,
    },

    /// Order was modified since it was loaded.
    VersionConflict {
        /// Order ID.
        order_id: String,
        /// Version the caller loaded.
        expected: u64,
        /// Version currently stored.
        actual: u64,
    },

    /// Payment signature does not match.
    PaymentVerificationFailed,

    /// Gateway order id does not belong to the order.
    PaymentOrderMismatch {
        /// Order ID.
        order_id: String,
    },

    /// Persistence failure.
    Storage {
        /// Error message.
        message: String,
    },
}

impl OrderError {
    /// Failure category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameters { .. }
            | Self::EmptyOrder
            | Self::InvalidQuantity { .. }
            | Self::ItemUnavailable { .. }
            | Self::MissingDeliveryAddress
            | Self::MissingMealTime
            | Self::MealTimeNotInFuture { .. }
            | Self::InvalidOrderType { .. }
            | Self::InvalidPaymentMethod { .. }
            | Self::InvalidStatus { .. }
            | Self::InvalidStateTransition { .. } => ErrorKind::Validation,
            Self::ItemNotFound { .. } | Self::NotFound { .. } => ErrorKind::NotFound,
            Self::DuplicateOrder { .. } | Self::VersionConflict { .. } => ErrorKind::Conflict,
            Self::PaymentVerificationFailed | Self::PaymentOrderMismatch { .. } => {
                ErrorKind::Security
            }
            Self::NotOwner { .. } => ErrorKind::Forbidden,
            Self::Storage { .. } => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { field, message } => {
                write!(f, "Invalid order parameter '{field}': {message}")
            }
            Self::EmptyOrder => write!(f, "At least one menu item is required"),
            Self::InvalidQuantity {
                menu_item_id,
                quantity,
            } => write!(
                f,
                "Invalid menu item '{menu_item_id}' with quantity {quantity}: each item must have a valid ID and quantity > 0"
            ),
            Self::ItemNotFound {
                menu_item_id,
                restaurant_id,
            } => write!(
                f,
                "Menu item {menu_item_id} not found or does not belong to restaurant {restaurant_id}"
            ),
            Self::ItemUnavailable { menu_item_id } => {
                write!(f, "Menu item {menu_item_id} is currently unavailable")
            }
            Self::MissingDeliveryAddress => {
                write!(f, "Delivery address is required for home delivery")
            }
            Self::MissingMealTime => {
                write!(f, "Meal time is required for dine-in advance orders")
            }
            Self::MealTimeNotInFuture { meal_time } => {
                write!(f, "Meal time {meal_time} must be in the future")
            }
            Self::InvalidOrderType { value } => write!(f, "Invalid order type: {value}"),
            Self::InvalidPaymentMethod { value } => {
                write!(f, "Invalid payment method: {value}")
            }
            Self::InvalidStatus { value } => write!(f, "Invalid order status: {value}"),
            Self::InvalidStateTransition { from, to, reason } => {
                write!(f, "Invalid order status transition {from} -> {to}: {reason}")
            }
            Self::DuplicateOrder { existing_order_id } => write!(
                f,
                "An identical active order already exists: {existing_order_id}"
            ),
            Self::NotFound { order_id } => write!(f, "Order not found: {order_id}"),
            Self::NotOwner { order_id } => {
                write!(f, "Order {order_id} does not belong to the caller")
            }
            Self::VersionConflict {
                order_id,
                expected,
                actual,
            } => write!(
                f,
                "Order {order_id} was modified concurrently (expected version {expected}, found {actual})"
            ),
            Self::PaymentVerificationFailed => write!(f, "Payment verification failed"),
            Self::PaymentOrderMismatch { order_id } => write!(
                f,
                "Payment does not belong to order {order_id}"
            ),
            Self::Storage { message } => write!(f, "Order storage error: {message}"),
        }
    }
}

impl std::error::Error for OrderError {}
