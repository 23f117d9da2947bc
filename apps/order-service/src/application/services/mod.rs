//! Application Services
//!
//! Application services coordinate domain logic and ports. The notification
//! dispatcher runs as a background task and also serves on-demand re-sends;
//! the others are called by use cases.

mod catalog_validator;
mod notification_dispatcher;
pub mod notification_template;
mod payment_signature;

pub use catalog_validator::CatalogValidator;
pub use notification_dispatcher::{
    Notice, NotificationDispatcher, NotificationKind, UnknownNotice,
};
pub use payment_signature::PaymentSignatureVerifier;
