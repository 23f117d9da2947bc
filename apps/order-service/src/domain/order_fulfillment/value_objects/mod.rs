//! Order Fulfillment Value Objects
//!
//! Immutable types for order placement and tracking.

mod fulfillment;
mod item_selection;
mod order_status;
mod order_type;
mod payment_method;

pub use fulfillment::Fulfillment;
pub use item_selection::ItemSelection;
pub use order_status::OrderStatus;
pub use order_type::OrderType;
pub use payment_method::PaymentMethod;
