//! Razorpay adapter implementing `PaymentGatewayPort`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::application::ports::{
    CreateIntentRequest, PaymentGatewayError, PaymentGatewayPort, PaymentIntent,
};

use super::api_types::{RazorpayErrorResponse, RazorpayOrderRequest, RazorpayOrderResponse};
use super::config::RazorpayConfig;
use super::error::RazorpayError;

/// Razorpay payment gateway adapter.
///
/// Intent creation is not retried; a failed call leaves no intent bound to
/// the order and the client may ask again.
#[derive(Debug, Clone)]
pub struct RazorpayGatewayAdapter {
    client: Client,
    config: RazorpayConfig,
}

impl RazorpayGatewayAdapter {
    /// Create a new adapter.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if credentials are empty, or `Client`
    /// if the HTTP client cannot be built.
    pub fn new(config: RazorpayConfig) -> Result<Self, RazorpayError> {
        if config.key_id.is_empty() || config.key_secret.is_empty() {
            return Err(RazorpayError::AuthenticationFailed);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RazorpayError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn create_order(
        &self,
        body: &RazorpayOrderRequest,
    ) -> Result<RazorpayOrderResponse, RazorpayError> {
        let response = self
            .client
            .post(self.config.orders_url())
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(body)
            .send()
            .await
            .map_err(|e| RazorpayError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RazorpayError::Network(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| RazorpayError::JsonParse(e.to_string()));
        }

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Err(RazorpayError::AuthenticationFailed);
        }

        let (code, message) = match serde_json::from_str::<RazorpayErrorResponse>(&text) {
            Ok(err) => (
                err.error.code.unwrap_or_else(|| status.as_u16().to_string()),
                err.error.description.unwrap_or_default(),
            ),
            Err(_) => (status.as_u16().to_string(), text),
        };

        Err(RazorpayError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}

#[async_trait]
impl PaymentGatewayPort for RazorpayGatewayAdapter {
    async fn create_intent(
        &self,
        request: CreateIntentRequest,
    ) -> Result<PaymentIntent, PaymentGatewayError> {
        let receipt = request.receipt.clone();
        let body = RazorpayOrderRequest::from(request);

        match self.create_order(&body).await {
            Ok(response) => {
                tracing::debug!(receipt = %receipt, gateway_order_id = %response.id, "Gateway order created");
                Ok(response.into())
            }
            Err(e) => {
                tracing::warn!(receipt = %receipt, error = %e, "Gateway order creation failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{basic_auth, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter(server: &MockServer) -> RazorpayGatewayAdapter {
        RazorpayGatewayAdapter::new(
            RazorpayConfig::new("rzp_test_key", "rzp_test_secret").with_base_url(server.uri()),
        )
        .unwrap()
    }

    fn request() -> CreateIntentRequest {
        CreateIntentRequest {
            amount_minor: 2500,
            currency: "INR".to_string(),
            receipt: "receipt_order-1".to_string(),
        }
    }

    #[test]
    fn empty_credentials_are_refused() {
        let result = RazorpayGatewayAdapter::new(RazorpayConfig::new("", "secret"));
        assert!(matches!(result, Err(RazorpayError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn creates_order_with_auto_capture() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .and(basic_auth("rzp_test_key", "rzp_test_secret"))
            .and(body_json(json!({
                "amount": 2500,
                "currency": "INR",
                "receipt": "receipt_order-1",
                "payment_capture": 1
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "order_A",
                "entity": "order",
                "amount": 2500,
                "currency": "INR",
                "receipt": "receipt_order-1",
                "status": "created"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let intent = adapter(&server).create_intent(request()).await.unwrap();

        assert_eq!(intent.gateway_order_id.as_str(), "order_A");
        assert_eq!(intent.amount_minor, 2500);
        assert_eq!(intent.currency, "INR");
    }

    #[tokio::test]
    async fn api_error_is_rejected_with_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": "BAD_REQUEST_ERROR",
                    "description": "The amount must be atleast INR 1.00"
                }
            })))
            .mount(&server)
            .await;

        let err = adapter(&server).create_intent(request()).await.unwrap_err();

        match err {
            PaymentGatewayError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("BAD_REQUEST_ERROR"));
                assert!(message.contains("atleast INR 1.00"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn bad_credentials_are_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = adapter(&server).create_intent(request()).await.unwrap_err();
        assert!(matches!(err, PaymentGatewayError::Rejected { status: 401, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = adapter(&server).create_intent(request()).await.unwrap_err();
        assert!(matches!(err, PaymentGatewayError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn unreachable_gateway_is_connection_error() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);
        let adapter = RazorpayGatewayAdapter::new(
            RazorpayConfig::new("k", "s").with_base_url(uri),
        )
        .unwrap();

        let err = adapter.create_intent(request()).await.unwrap_err();
        assert!(matches!(err, PaymentGatewayError::ConnectionError { .. }));
    }
}
