//! Order Fulfillment Bounded Context
//!
//! Manages an order from placement through preparation to completion or
//! cancellation, including payment confirmation.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: Prices the order once and owns its status and paid flag
//! - **Transition Table**: `PENDING -> PREPARING -> READY -> COMPLETED`, cancel from any non-terminal state
//! - **Duplicate Guard**: At most one `PENDING`/`PREPARING` order per user, restaurant, type and item multiset
//! - **Domain Events**: Drive notifications after the write has committed

pub mod aggregate;
pub mod errors;
pub mod events;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::{Order, OrderLine, PlaceOrderCommand, ReconstitutedOrderParams};
pub use errors::{ErrorKind, OrderError};
pub use events::{
    OrderCancelled, OrderCompleted, OrderEvent, OrderPlaced, OrderStatusChanged, PaymentConfirmed,
};
pub use repository::OrderRepository;
pub use services::{DuplicateOrderGuard, OrderFingerprint, OrderStateMachine, OrderTypePolicy};
pub use value_objects::{
    Fulfillment, ItemSelection, OrderStatus, OrderType, PaymentMethod,
};
