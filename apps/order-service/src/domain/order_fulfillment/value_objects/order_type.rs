//! Order type: how the diner receives the meal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::order_fulfillment::errors::OrderError;

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Delivered to the diner's address.
    HomeDelivery,
    /// Eaten at the restaurant at a pre-booked meal time.
    DineInAdvance,
}

impl OrderType {
    /// Wire name of the order type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HomeDelivery => "HOME_DELIVERY",
            Self::DineInAdvance => "DINE_IN_ADVANCE",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOME_DELIVERY" => Ok(Self::HomeDelivery),
            "DINE_IN_ADVANCE" => Ok(Self::DineInAdvance),
            other => Err(OrderError::InvalidOrderType {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("HOME_DELIVERY", OrderType::HomeDelivery)]
    #[test_case("DINE_IN_ADVANCE", OrderType::DineInAdvance)]
    fn parses_known_types(raw: &str, expected: OrderType) {
        assert_eq!(raw.parse::<OrderType>().unwrap(), expected);
        assert_eq!(expected.to_string(), raw);
    }

    #[test_case("TAKEAWAY")]
    #[test_case("home_delivery")]
    fn rejects_unknown_types(raw: &str) {
        assert!(matches!(
            raw.parse::<OrderType>(),
            Err(OrderError::InvalidOrderType { .. })
        ));
    }
}
