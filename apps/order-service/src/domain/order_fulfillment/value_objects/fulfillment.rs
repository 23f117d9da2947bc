//! Order-type specific fulfillment details.

use serde::{Deserialize, Serialize};

use super::OrderType;
use crate::domain::shared::Timestamp;

/// Fulfillment details, one variant per order type.
///
/// A delivery order carries exactly a delivery address, a dine-in order
/// exactly a meal time. Construct through `OrderTypePolicy::resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fulfillment {
    /// Deliver to an address.
    HomeDelivery {
        /// Non-empty delivery address.
        delivery_address: String,
    },
    /// Serve at the restaurant.
    DineInAdvance {
        /// Booked meal time.
        meal_time: Timestamp,
    },
}

impl Fulfillment {
    /// The order type these details belong to.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        match self {
            Self::HomeDelivery { .. } => OrderType::HomeDelivery,
            Self::DineInAdvance { .. } => OrderType::DineInAdvance,
        }
    }

    /// Delivery address, for delivery orders.
    #[must_use]
    pub fn delivery_address(&self) -> Option<&str> {
        match self {
            Self::HomeDelivery { delivery_address } => Some(delivery_address),
            Self::DineInAdvance { .. } => None,
        }
    }

    /// Meal time, for dine-in orders.
    #[must_use]
    pub const fn meal_time(&self) -> Option<Timestamp> {
        match self {
            Self::HomeDelivery { .. } => None,
            Self::DineInAdvance { meal_time } => Some(*meal_time),
        }
    }
}
