//! Razorpay Payment Gateway Adapter
//!
//! Implementation of `PaymentGatewayPort` against the Razorpay Orders API:
//! - Basic auth with the key id and key secret
//! - Amounts in minor units with auto-capture
//! - Error bodies mapped onto `PaymentGatewayError`

mod adapter;
mod api_types;
mod config;
mod error;

pub use adapter::RazorpayGatewayAdapter;
pub use config::RazorpayConfig;
pub use error::RazorpayError;
