//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: Order store (in-memory)
//!   - `catalog/`: Menu item lookup
//!   - `directory/`: User and restaurant contacts
//!   - `payment/`: Payment gateway adapters (Razorpay)
//!   - `notification/`: Email delivery adapters
//!   - `messaging/`: Event queue feeding the notification dispatcher
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API controllers
//!
//! - `config/`: Dependency injection container

pub mod catalog;
pub mod config;
pub mod directory;
pub mod http;
pub mod messaging;
pub mod notification;
pub mod payment;
pub mod persistence;
