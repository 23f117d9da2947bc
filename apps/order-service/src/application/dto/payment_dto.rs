//! Payment DTOs

use serde::{Deserialize, Serialize};

/// Request to create a payment intent for an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentDto {
    /// Order ID.
    #[serde(default)]
    pub order_id: String,
}

/// Created intent, as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentDto {
    /// Always true on success.
    pub success: bool,
    /// Gateway order id the client pays against.
    pub order_id: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Currency code.
    pub currency: String,
}

/// Gateway completion callback forwarded by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentDto {
    /// Gateway order id.
    #[serde(default, alias = "razorpayOrderId", alias = "razorpay_order_id")]
    pub gateway_order_id: String,
    /// Gateway payment id.
    #[serde(default, alias = "razorpayPaymentId", alias = "razorpay_payment_id")]
    pub gateway_payment_id: String,
    /// Hex HMAC-SHA256 signature.
    #[serde(default, alias = "razorpaySignature", alias = "razorpay_signature")]
    pub signature: String,
    /// Order ID.
    #[serde(default)]
    pub order_id: String,
}

/// Verification acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentResultDto {
    /// Always true on success.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}
