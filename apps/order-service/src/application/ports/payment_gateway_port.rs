//! Payment Gateway Port (Driven Port)
//!
//! Interface for creating remote payment intents.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::shared::GatewayOrderId;

/// Request to create a payment intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIntentRequest {
    /// Amount in minor units (paise, cents).
    pub amount_minor: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Merchant receipt reference.
    pub receipt: String,
}

/// Intent created by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Gateway's order id for the intent.
    pub gateway_order_id: GatewayOrderId,
    /// Amount in minor units, as echoed by the gateway.
    pub amount_minor: i64,
    /// Currency, as echoed by the gateway.
    pub currency: String,
}

/// Payment gateway error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentGatewayError {
    /// Network or timeout error.
    #[error("Payment gateway connection error: {message}")]
    ConnectionError { message: String },

    /// Gateway refused the request.
    #[error("Payment gateway rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Gateway answered with something unparseable.
    #[error("Invalid payment gateway response: {message}")]
    InvalidResponse { message: String },
}

/// Port for the external payment gateway.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    /// Create a payment intent.
    async fn create_intent(
        &self,
        request: CreateIntentRequest,
    ) -> Result<PaymentIntent, PaymentGatewayError>;
}
