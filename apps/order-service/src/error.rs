//! Error responses for the order service.
//!
//! Every failure leaving the HTTP boundary is a `ServiceError`: a stable
//! machine-readable code, a message and optional context, rendered as
//! `{ "error": ..., "code": ..., "details": {...} }`.
//!
//! # HTTP Status Codes
//!
//! | Status | Usage |
//! |--------|-------|
//! | 400 | Validation failures, bad payment signatures |
//! | 401 | Missing principal header |
//! | 403 | Principal does not own the order |
//! | 404 | Unknown order or menu item |
//! | 409 | Duplicate active order, concurrent modification |
//! | 502 | Catalog, directory or payment gateway failure |
//! | 500 | Storage or unexpected failure |

use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::errors::UseCaseError;
use crate::domain::order_fulfillment::errors::OrderError;

/// Error codes for the order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (400)
    /// Malformed body or invalid field.
    InvalidRequest,
    /// No line items.
    EmptyOrder,
    /// Line item with blank id or non-positive quantity.
    InvalidQuantity,
    /// Menu item cannot currently be ordered.
    ItemUnavailable,
    /// Delivery order without an address.
    MissingDeliveryAddress,
    /// Dine-in order without a meal time.
    MissingMealTime,
    /// Meal time not after the creation instant.
    MealTimeNotInFuture,
    /// Unknown order type.
    InvalidOrderType,
    /// Unknown payment method.
    InvalidPaymentMethod,
    /// Unknown status value.
    InvalidStatus,
    /// Status change not allowed from the current status.
    InvalidStateTransition,

    // Security errors (400)
    /// Payment signature did not verify.
    PaymentVerificationFailed,
    /// Payment belongs to a different intent.
    PaymentOrderMismatch,

    // Principal errors (401/403)
    /// No principal supplied.
    Unauthenticated,
    /// Principal does not own the order.
    NotOwner,

    // Not found errors (404)
    /// Order not found.
    OrderNotFound,
    /// Menu item not found for the restaurant.
    ItemNotFound,

    // Conflict errors (409)
    /// Equivalent active order exists.
    DuplicateOrder,
    /// Order changed since it was read.
    VersionConflict,

    // Dependency errors (502)
    /// External collaborator failed.
    DependencyFailed,

    // Internal errors (500)
    /// Internal server error.
    InternalError,
}

impl ErrorCode {
    /// HTTP status for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest
            | Self::EmptyOrder
            | Self::InvalidQuantity
            | Self::ItemUnavailable
            | Self::MissingDeliveryAddress
            | Self::MissingMealTime
            | Self::MealTimeNotInFuture
            | Self::InvalidOrderType
            | Self::InvalidPaymentMethod
            | Self::InvalidStatus
            | Self::InvalidStateTransition
            | Self::PaymentVerificationFailed
            | Self::PaymentOrderMismatch => StatusCode::BAD_REQUEST,

            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotOwner => StatusCode::FORBIDDEN,

            Self::OrderNotFound | Self::ItemNotFound => StatusCode::NOT_FOUND,

            Self::DuplicateOrder | Self::VersionConflict => StatusCode::CONFLICT,

            Self::DependencyFailed => StatusCode::BAD_GATEWAY,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Wire name of the code.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::EmptyOrder => "EMPTY_ORDER",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::ItemUnavailable => "ITEM_UNAVAILABLE",
            Self::MissingDeliveryAddress => "MISSING_DELIVERY_ADDRESS",
            Self::MissingMealTime => "MISSING_MEAL_TIME",
            Self::MealTimeNotInFuture => "MEAL_TIME_NOT_IN_FUTURE",
            Self::InvalidOrderType => "INVALID_ORDER_TYPE",
            Self::InvalidPaymentMethod => "INVALID_PAYMENT_METHOD",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            Self::PaymentVerificationFailed => "PAYMENT_VERIFICATION_FAILED",
            Self::PaymentOrderMismatch => "PAYMENT_ORDER_MISMATCH",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::NotOwner => "NOT_OWNER",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::ItemNotFound => "ITEM_NOT_FOUND",
            Self::DuplicateOrder => "DUPLICATE_ORDER",
            Self::VersionConflict => "VERSION_CONFLICT",
            Self::DependencyFailed => "DEPENDENCY_FAILED",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// An error with context, ready to be sent to a client.
#[derive(Debug, Error)]
pub struct ServiceError {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
}

impl ServiceError {
    /// Create a new service error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Response body for this error.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        HttpErrorResponse {
            error: self.message.clone(),
            code: self.code.reason().to_string(),
            details: self.context.iter().cloned().collect(),
        }
    }

    /// Missing principal header.
    #[must_use]
    pub fn unauthenticated(header: &str) -> Self {
        Self::new(
            ErrorCode::Unauthenticated,
            format!("Missing or empty '{header}' header"),
        )
        .with_context("header", header)
    }

    /// Request body could not be read.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

/// HTTP error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Error code string.
    pub code: String,
    /// Additional details.
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.code.http_status();
        if status.is_server_error() {
            tracing::error!(code = %self.code, error = %self.message, "Request failed");
        }
        (status, Json(self.to_http_response())).into_response()
    }
}

impl From<OrderError> for ServiceError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::InvalidParameters { field, .. } => {
                Self::new(ErrorCode::InvalidRequest, message).with_context("field", field)
            }
            OrderError::EmptyOrder => Self::new(ErrorCode::EmptyOrder, message),
            OrderError::InvalidQuantity { menu_item_id, .. } => {
                Self::new(ErrorCode::InvalidQuantity, message)
                    .with_context("menuItemId", menu_item_id)
            }
            OrderError::ItemNotFound {
                menu_item_id,
                restaurant_id,
            } => Self::new(ErrorCode::ItemNotFound, message)
                .with_context("menuItemId", menu_item_id)
                .with_context("restaurantId", restaurant_id),
            OrderError::ItemUnavailable { menu_item_id } => {
                Self::new(ErrorCode::ItemUnavailable, message)
                    .with_context("menuItemId", menu_item_id)
            }
            OrderError::MissingDeliveryAddress => {
                Self::new(ErrorCode::MissingDeliveryAddress, message)
            }
            OrderError::MissingMealTime => Self::new(ErrorCode::MissingMealTime, message),
            OrderError::MealTimeNotInFuture { meal_time } => {
                Self::new(ErrorCode::MealTimeNotInFuture, message)
                    .with_context("mealTime", meal_time)
            }
            OrderError::InvalidOrderType { value } => {
                Self::new(ErrorCode::InvalidOrderType, message).with_context("value", value)
            }
            OrderError::InvalidPaymentMethod { value } => {
                Self::new(ErrorCode::InvalidPaymentMethod, message).with_context("value", value)
            }
            OrderError::InvalidStatus { value } => {
                Self::new(ErrorCode::InvalidStatus, message).with_context("value", value)
            }
            OrderError::InvalidStateTransition { from, to, .. } => {
                Self::new(ErrorCode::InvalidStateTransition, message)
                    .with_context("from", from.as_str())
                    .with_context("to", to.as_str())
            }
            OrderError::DuplicateOrder { existing_order_id } => {
                Self::new(ErrorCode::DuplicateOrder, message)
                    .with_context("existingOrderId", existing_order_id)
            }
            OrderError::NotFound { order_id } => {
                Self::new(ErrorCode::OrderNotFound, message).with_context("orderId", order_id)
            }
            OrderError::NotOwner { order_id } => {
                Self::new(ErrorCode::NotOwner, message).with_context("orderId", order_id)
            }
            OrderError::VersionConflict {
                order_id,
                expected,
                actual,
            } => Self::new(ErrorCode::VersionConflict, message)
                .with_context("orderId", order_id)
                .with_context("expectedVersion", expected.to_string())
                .with_context("actualVersion", actual.to_string()),
            OrderError::PaymentVerificationFailed => {
                Self::new(ErrorCode::PaymentVerificationFailed, message)
            }
            OrderError::PaymentOrderMismatch { order_id } => {
                Self::new(ErrorCode::PaymentOrderMismatch, message)
                    .with_context("orderId", order_id)
            }
            OrderError::Storage { .. } => Self::new(ErrorCode::InternalError, message),
        }
    }
}

impl From<UseCaseError> for ServiceError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::Order(e) => e.into(),
            UseCaseError::Catalog(e) => {
                Self::new(ErrorCode::DependencyFailed, e.to_string()).with_context("dependency", "catalog")
            }
            UseCaseError::Directory(e) => Self::new(ErrorCode::DependencyFailed, e.to_string())
                .with_context("dependency", "directory"),
            UseCaseError::PaymentGateway(e) => Self::new(ErrorCode::DependencyFailed, e.to_string())
                .with_context("dependency", "payment_gateway"),
        }
    }
}
