// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements,
        clippy::default_trait_access
    )
)]

//! Order Service - Rust Core Library
//!
//! Restaurant ordering backend: order placement, kitchen status tracking,
//! gateway payments and email notifications.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, domain events)
//!   - `order_fulfillment`: Order aggregate, status lifecycle, order type
//!     policy, duplicate guard
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`CatalogPort`, `PaymentGatewayPort`)
//!   - `services`: Catalog validation, payment signatures, notification dispatch
//!   - `use_cases`: `PlaceOrder`, `UpdateOrderStatus`, `ListOrders`,
//!     `CreatePaymentIntent`, `VerifyPayment`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `http`: REST API
//!   - `payment`: Razorpay adapter
//!   - `notification`: Log and webhook email senders
//!   - `persistence`: Order repository (in-memory)
//!   - `config`: Dependency injection container

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration loading and validation.
pub mod config;

/// HTTP error model.
pub mod error;

/// Structured logging setup.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::order_fulfillment::{
    Fulfillment, Order, OrderError, OrderEvent, OrderStatus, OrderType, PaymentMethod,
};
pub use domain::shared::{MenuItemId, Money, OrderId, RestaurantId, Timestamp, UserId};

// Application re-exports
pub use application::dto::{CreateOrderDto, OrderCreatedDto, UpdateOrderStatusDto};
pub use application::ports::{
    CatalogPort, ContactDirectoryPort, EventPublisherPort, NoOpEventPublisher,
    NotificationSenderPort, PaymentGatewayPort,
};
pub use application::services::{NotificationDispatcher, PaymentSignatureVerifier};
pub use application::use_cases::{
    CreatePaymentIntentUseCase, ListOrdersUseCase, PlaceOrderUseCase, UpdateOrderStatusUseCase,
    VerifyPaymentUseCase,
};

// Infrastructure re-exports
pub use infrastructure::config::{Container, ServiceContainer, build_container};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::InMemoryOrderRepository;

// Cross-cutting re-exports
pub use config::{Config, load_config};
pub use error::{ErrorCode, ServiceError};
