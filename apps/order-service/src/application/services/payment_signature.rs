//! Payment completion signature verification.
//!
//! The gateway signs `"{gateway_order_id}|{gateway_payment_id}"` with
//! HMAC-SHA256 under the shared key secret and sends the hex digest.
//! Uses `ring` for constant-time comparison. The secret is never logged.

use std::fmt;

use ring::hmac;

use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::shared::{GatewayOrderId, GatewayPaymentId};

/// Hex length of an HMAC-SHA256 digest.
const SIGNATURE_HEX_LEN: usize = 64;

/// Verifies gateway payment signatures.
#[derive(Clone)]
pub struct PaymentSignatureVerifier {
    key: hmac::Key,
}

impl PaymentSignatureVerifier {
    /// Create a verifier for a shared secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes()),
        }
    }

    fn payload(gateway_order_id: &GatewayOrderId, gateway_payment_id: &GatewayPaymentId) -> String {
        format!("{gateway_order_id}|{gateway_payment_id}")
    }

    /// Hex-encoded signature the gateway would send for this payment.
    #[must_use]
    pub fn sign(
        &self,
        gateway_order_id: &GatewayOrderId,
        gateway_payment_id: &GatewayPaymentId,
    ) -> String {
        let payload = Self::payload(gateway_order_id, gateway_payment_id);
        let tag = hmac::sign(&self.key, payload.as_bytes());
        hex::encode(tag.as_ref())
    }

    /// Check a hex-encoded signature.
    ///
    /// The signature must be exactly the lower-case hex digest the gateway
    /// produces; case and surrounding whitespace are not normalized.
    ///
    /// # Errors
    ///
    /// Returns `PaymentVerificationFailed` if the signature is not 64
    /// lower-case hex characters or does not match.
    pub fn verify(
        &self,
        gateway_order_id: &GatewayOrderId,
        gateway_payment_id: &GatewayPaymentId,
        signature: &str,
    ) -> Result<(), OrderError> {
        if !is_lower_hex_digest(signature) {
            return Err(OrderError::PaymentVerificationFailed);
        }
        let tag = hex::decode(signature).map_err(|_| OrderError::PaymentVerificationFailed)?;
        let payload = Self::payload(gateway_order_id, gateway_payment_id);
        hmac::verify(&self.key, payload.as_bytes(), &tag)
            .map_err(|_| OrderError::PaymentVerificationFailed)
    }
}

fn is_lower_hex_digest(signature: &str) -> bool {
    signature.len() == SIGNATURE_HEX_LEN
        && signature
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

impl fmt::Debug for PaymentSignatureVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentSignatureVerifier")
            .field("key", &"<redacted>")
            .finish()
    }
}
