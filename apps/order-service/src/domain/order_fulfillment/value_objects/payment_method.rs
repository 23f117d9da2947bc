//! How the diner intends to pay.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::order_fulfillment::errors::OrderError;

/// Payment method chosen at order placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Paid through the payment gateway.
    #[default]
    OnlinePayment,
    /// Cash handed over on delivery.
    CashOnDelivery,
    /// Settled at the restaurant.
    PayAtRestaurant,
}

impl PaymentMethod {
    /// Wire name of the payment method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnlinePayment => "ONLINE_PAYMENT",
            Self::CashOnDelivery => "CASH_ON_DELIVERY",
            Self::PayAtRestaurant => "PAY_AT_RESTAURANT",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ONLINE_PAYMENT" => Ok(Self::OnlinePayment),
            "CASH_ON_DELIVERY" => Ok(Self::CashOnDelivery),
            "PAY_AT_RESTAURANT" => Ok(Self::PayAtRestaurant),
            other => Err(OrderError::InvalidPaymentMethod {
                value: other.to_string(),
            }),
        }
    }
}
