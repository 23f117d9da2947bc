//! Create Payment Intent Use Case

use std::sync::Arc;

use crate::application::dto::PaymentIntentDto;
use crate::application::errors::UseCaseError;
use crate::application::ports::{CreateIntentRequest, PaymentGatewayPort};
use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::order_fulfillment::repository::OrderRepository;
use crate::domain::shared::{OrderId, UserId};

/// Use case for opening a gateway payment for an order.
pub struct CreatePaymentIntentUseCase<O, G>
where
    O: OrderRepository,
    G: PaymentGatewayPort,
{
    order_repo: Arc<O>,
    gateway: Arc<G>,
    currency: String,
}

impl<O, G> CreatePaymentIntentUseCase<O, G>
where
    O: OrderRepository,
    G: PaymentGatewayPort,
{
    /// Create a new `CreatePaymentIntentUseCase`.
    pub fn new(order_repo: Arc<O>, gateway: Arc<G>, currency: impl Into<String>) -> Self {
        Self {
            order_repo,
            gateway,
            currency: currency.into(),
        }
    }

    /// Request an intent for the order total and bind it to the order.
    ///
    /// # Errors
    ///
    /// `NotFound`, `NotOwner`, `InvalidParameters` for paid orders,
    /// `VersionConflict`, or a gateway dependency failure.
    pub async fn execute(
        &self,
        user_id: &UserId,
        order_id: &OrderId,
    ) -> Result<PaymentIntentDto, UseCaseError> {
        let mut order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_id: order_id.to_string(),
            })?;

        if order.user_id() != user_id {
            return Err(OrderError::NotOwner {
                order_id: order_id.to_string(),
            }
            .into());
        }
        if order.is_paid() {
            return Err(OrderError::InvalidParameters {
                field: "orderId".to_string(),
                message: format!("Order {order_id} is already paid"),
            }
            .into());
        }

        let amount_minor = order
            .total_amount()
            .to_minor_units()
            .ok_or_else(|| OrderError::InvalidParameters {
                field: "totalAmount".to_string(),
                message: "Order total cannot be expressed in minor units".to_string(),
            })?;

        let intent = self
            .gateway
            .create_intent(CreateIntentRequest {
                amount_minor,
                currency: self.currency.clone(),
                receipt: format!("receipt_{order_id}"),
            })
            .await?;

        let expected_version = order.version();
        order.attach_payment_intent(intent.gateway_order_id.clone())?;
        self.order_repo.update(&order, expected_version).await?;

        tracing::info!(
            order_id = %order_id,
            gateway_order_id = %intent.gateway_order_id,
            amount_minor = intent.amount_minor,
            currency = %intent.currency,
            "Payment intent created"
        );

        Ok(PaymentIntentDto {
            success: true,
            order_id: intent.gateway_order_id.into_inner(),
            amount: intent.amount_minor,
            currency: intent.currency,
        })
    }
}
