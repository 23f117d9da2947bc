//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces to the catalog, directory, gateway and queue
//! - **Services**: Catalog pricing, signature checks and notifications
//! - **Use Cases**: Application-specific business rules
//! - **DTOs**: Data transfer objects for API boundaries

pub mod dto;
pub mod errors;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use dto::*;
pub use errors::UseCaseError;
pub use ports::*;
pub use services::*;
pub use use_cases::*;
