//! Payment Gateway Adapters

pub mod razorpay;

pub use razorpay::{RazorpayConfig, RazorpayGatewayAdapter};
