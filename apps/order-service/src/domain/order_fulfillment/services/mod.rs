//! Order Fulfillment Domain Services
//!
//! Stateless business logic that doesn't fit in the aggregate.

mod duplicate_order_guard;
mod order_state_machine;
mod order_type_policy;

pub use duplicate_order_guard::{DuplicateOrderGuard, OrderFingerprint};
pub use order_state_machine::OrderStateMachine;
pub use order_type_policy::OrderTypePolicy;
