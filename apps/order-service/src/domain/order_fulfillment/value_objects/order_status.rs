//! Order status in the fulfillment lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::order_fulfillment::errors::OrderError;

/// Order status.
///
/// ```text
/// PENDING -> PREPARING -> READY -> COMPLETED
///    \___________\___________\____> CANCELLED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order placed, not yet picked up by the kitchen.
    Pending,
    /// Kitchen is preparing the order.
    Preparing,
    /// Ready for pickup, delivery or serving.
    Ready,
    /// Handed over to the diner.
    Completed,
    /// Cancelled before completion.
    Cancelled,
}

impl OrderStatus {
    /// Every recognized status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Preparing,
        Self::Ready,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns true if the order is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns true while the order has not reached a terminal state.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns true if an order in this status blocks an identical new submission.
    #[must_use]
    pub const fn blocks_duplicates(&self) -> bool {
        matches!(self, Self::Pending | Self::Preparing)
    }

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Preparing => "PREPARING",
            Self::Ready => "READY",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrderError::InvalidStatus {
                value: s.to_string(),
            })
    }
}
