//! Application Ports (Driven)
//!
//! Interfaces to the collaborators the order core depends on: catalog,
//! identity/contact lookup, payment gateway, notification delivery and the
//! event queue. Implemented by adapters in the infrastructure layer.

mod catalog_port;
mod contact_directory_port;
mod event_publisher_port;
mod notification_sender_port;
mod payment_gateway_port;

pub use catalog_port::{CatalogError, CatalogItem, CatalogPort};
pub use contact_directory_port::{
    ContactDirectoryPort, DirectoryError, RestaurantContact, UserContact,
};
pub use event_publisher_port::{EventPublishError, EventPublisherPort, NoOpEventPublisher};
pub use notification_sender_port::{NotificationError, NotificationSenderPort, OutboundMessage};
pub use payment_gateway_port::{
    CreateIntentRequest, PaymentGatewayError, PaymentGatewayPort, PaymentIntent,
};

#[cfg(test)]
pub use catalog_port::MockCatalogPort;
#[cfg(test)]
pub use payment_gateway_port::MockPaymentGatewayPort;
