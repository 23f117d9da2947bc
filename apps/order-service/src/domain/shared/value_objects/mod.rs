//! Shared Value Objects
//!
//! Immutable domain types compared by value, not identity.

mod identifiers;
mod money;
mod timestamp;

pub use identifiers::{GatewayOrderId, GatewayPaymentId, MenuItemId, OrderId, RestaurantId, UserId};
pub use money::Money;
pub use timestamp::Timestamp;
