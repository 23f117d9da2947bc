//! Razorpay Orders API request and response types.

use serde::{Deserialize, Serialize};

use crate::application::ports::{CreateIntentRequest, PaymentIntent};
use crate::domain::shared::GatewayOrderId;

/// Body of `POST /v1/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct RazorpayOrderRequest {
    /// Amount in minor units.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Merchant receipt.
    pub receipt: String,
    /// 1 for automatic capture.
    pub payment_capture: u8,
}

impl From<CreateIntentRequest> for RazorpayOrderRequest {
    fn from(request: CreateIntentRequest) -> Self {
        Self {
            amount: request.amount_minor,
            currency: request.currency,
            receipt: request.receipt,
            payment_capture: 1,
        }
    }
}

/// Order returned by the API. Unused fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayOrderResponse {
    /// Gateway order id, `order_...`.
    pub id: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Currency code.
    pub currency: String,
}

impl From<RazorpayOrderResponse> for PaymentIntent {
    fn from(response: RazorpayOrderResponse) -> Self {
        Self {
            gateway_order_id: GatewayOrderId::new(response.id),
            amount_minor: response.amount,
            currency: response.currency,
        }
    }
}

/// Error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayErrorResponse {
    /// Error details.
    pub error: RazorpayErrorBody,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayErrorBody {
    /// Error code, e.g. `BAD_REQUEST_ERROR`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}
