//! Order State Machine Service
//!
//! Validates status transitions against an explicit transition table.

use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::order_fulfillment::value_objects::OrderStatus;

/// Order State Machine for validating transitions.
pub struct OrderStateMachine;

impl OrderStateMachine {
    /// Check if a state transition is valid.
    #[must_use]
    pub const fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
        matches!(
            (from, to),
            (OrderStatus::Pending, OrderStatus::Preparing)
                | (OrderStatus::Preparing, OrderStatus::Ready)
                | (OrderStatus::Ready, OrderStatus::Completed)
                // Cancellation from any non-terminal state
                | (
                    OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::Ready,
                    OrderStatus::Cancelled
                )
        )
    }

    /// Validate a state transition.
    ///
    /// # Errors
    ///
    /// Returns error if the transition is invalid.
    pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(OrderError::InvalidStateTransition {
                from,
                to,
                reason: Self::transition_error_reason(from, to),
            })
        }
    }

    /// Get a human-readable reason for an invalid transition.
    #[must_use]
    pub fn transition_error_reason(from: OrderStatus, to: OrderStatus) -> String {
        match from {
            OrderStatus::Completed => {
                format!("Order is already completed, cannot transition to {to}")
            }
            OrderStatus::Cancelled => format!("Order is cancelled, cannot transition to {to}"),
            _ if from == to => format!("Order is already {to}"),
            _ => {
                let allowed: Vec<&str> = Self::valid_next_states(from)
                    .iter()
                    .map(OrderStatus::as_str)
                    .collect();
                format!(
                    "Invalid transition from {from} to {to}; expected one of {}",
                    allowed.join(", ")
                )
            }
        }
    }

    /// Get all valid next states from a given state.
    #[must_use]
    pub fn valid_next_states(from: OrderStatus) -> Vec<OrderStatus> {
        match from {
            OrderStatus::Pending => vec![OrderStatus::Preparing, OrderStatus::Cancelled],
            OrderStatus::Preparing => vec![OrderStatus::Ready, OrderStatus::Cancelled],
            OrderStatus::Ready => vec![OrderStatus::Completed, OrderStatus::Cancelled],
            // Terminal states
            OrderStatus::Completed | OrderStatus::Cancelled => vec![],
        }
    }

    /// Derived activity flag for a status.
    #[must_use]
    pub const fn is_active(status: OrderStatus) -> bool {
        status.is_active()
    }
}
