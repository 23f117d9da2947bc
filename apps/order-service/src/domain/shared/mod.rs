//! Shared Domain Types
//!
//! Value objects shared across the domain.

pub mod value_objects;

pub use value_objects::{
    GatewayOrderId, GatewayPaymentId, MenuItemId, Money, OrderId, RestaurantId, Timestamp, UserId,
};
