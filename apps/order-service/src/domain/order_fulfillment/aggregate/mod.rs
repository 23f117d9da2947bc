//! Order Aggregate
//!
//! The Order aggregate is the root entity for a placed order.

mod order;
mod order_line;

pub use order::{Order, PlaceOrderCommand, ReconstitutedOrderParams};
pub use order_line::OrderLine;
