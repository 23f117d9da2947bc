//! Per-order-type field requirements.

use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::order_fulfillment::value_objects::{Fulfillment, OrderType};
use crate::domain::shared::Timestamp;

/// Decides which auxiliary field an order type needs and keeps only that one.
pub struct OrderTypePolicy;

impl OrderTypePolicy {
    /// Resolve fulfillment details for an order type.
    ///
    /// A delivery order needs a non-blank address and a dine-in order needs a
    /// meal time strictly after `now`. The field that does not apply to the
    /// order type is discarded.
    ///
    /// # Errors
    ///
    /// Returns `MissingDeliveryAddress`, `MissingMealTime` or `MealTimeNotInFuture`.
    pub fn resolve(
        order_type: OrderType,
        delivery_address: Option<&str>,
        meal_time: Option<Timestamp>,
        now: Timestamp,
    ) -> Result<Fulfillment, OrderError> {
        match order_type {
            OrderType::HomeDelivery => {
                let address = delivery_address
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .ok_or(OrderError::MissingDeliveryAddress)?;
                Ok(Fulfillment::HomeDelivery {
                    delivery_address: address.to_string(),
                })
            }
            OrderType::DineInAdvance => {
                let meal_time = meal_time.ok_or(OrderError::MissingMealTime)?;
                if meal_time <= now {
                    return Err(OrderError::MealTimeNotInFuture {
                        meal_time: meal_time.to_rfc3339(),
                    });
                }
                Ok(Fulfillment::DineInAdvance { meal_time })
            }
        }
    }
}
