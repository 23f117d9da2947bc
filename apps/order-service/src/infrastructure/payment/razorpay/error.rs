//! Razorpay-specific error types.

use thiserror::Error;

use crate::application::ports::PaymentGatewayError;

/// Errors from the Razorpay adapter.
#[derive(Debug, Error, Clone)]
pub enum RazorpayError {
    /// Client could not be built.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Request did not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// Credentials were refused.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// API returned an error.
    #[error("API error ({status}): {code} - {message}")]
    Api {
        /// HTTP status.
        status: u16,
        /// Error code from the API.
        code: String,
        /// Error description from the API.
        message: String,
    },

    /// Response body did not parse.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<RazorpayError> for PaymentGatewayError {
    fn from(err: RazorpayError) -> Self {
        match err {
            RazorpayError::Client(message) | RazorpayError::Network(message) => {
                Self::ConnectionError { message }
            }
            RazorpayError::AuthenticationFailed => Self::Rejected {
                status: 401,
                message: "Authentication failed".to_string(),
            },
            RazorpayError::Api {
                status,
                code,
                message,
            } => Self::Rejected {
                status,
                message: format!("{code}: {message}"),
            },
            RazorpayError::JsonParse(message) => Self::InvalidResponse { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_is_connection_error() {
        let err: PaymentGatewayError = RazorpayError::Network("timed out".to_string()).into();
        assert!(matches!(err, PaymentGatewayError::ConnectionError { .. }));
    }

    #[test]
    fn api_error_keeps_status() {
        let err: PaymentGatewayError = RazorpayError::Api {
            status: 400,
            code: "BAD_REQUEST_ERROR".to_string(),
            message: "amount too small".to_string(),
        }
        .into();
        assert!(matches!(err, PaymentGatewayError::Rejected { status: 400, .. }));
        assert!(err.to_string().contains("amount too small"));
    }

    #[test]
    fn parse_error_is_invalid_response() {
        let err: PaymentGatewayError = RazorpayError::JsonParse("eof".to_string()).into();
        assert!(matches!(err, PaymentGatewayError::InvalidResponse { .. }));
    }
}
