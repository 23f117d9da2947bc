//! Verify Payment Use Case

use std::sync::Arc;

use crate::application::dto::{VerifyPaymentDto, VerifyPaymentResultDto};
use crate::application::errors::UseCaseError;
use crate::application::ports::EventPublisherPort;
use crate::application::services::PaymentSignatureVerifier;
use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::order_fulfillment::repository::OrderRepository;
use crate::domain::shared::{GatewayOrderId, GatewayPaymentId, OrderId};

/// Use case for confirming a completed gateway payment.
pub struct VerifyPaymentUseCase<O, E>
where
    O: OrderRepository,
    E: EventPublisherPort,
{
    order_repo: Arc<O>,
    verifier: PaymentSignatureVerifier,
    event_publisher: Arc<E>,
}

impl<O, E> VerifyPaymentUseCase<O, E>
where
    O: OrderRepository,
    E: EventPublisherPort,
{
    /// Create a new `VerifyPaymentUseCase`.
    pub const fn new(
        order_repo: Arc<O>,
        verifier: PaymentSignatureVerifier,
        event_publisher: Arc<E>,
    ) -> Self {
        Self {
            order_repo,
            verifier,
            event_publisher,
        }
    }

    /// Check the signature and mark the bound order paid.
    ///
    /// The signature is checked before anything is loaded. The order must
    /// carry the same gateway order id the signature covers.
    ///
    /// # Errors
    ///
    /// `PaymentVerificationFailed`, `NotFound`, `PaymentOrderMismatch` or
    /// `VersionConflict`.
    pub async fn execute(
        &self,
        request: VerifyPaymentDto,
    ) -> Result<VerifyPaymentResultDto, UseCaseError> {
        let gateway_order_id = GatewayOrderId::new(request.gateway_order_id.trim());
        let gateway_payment_id = GatewayPaymentId::new(request.gateway_payment_id.trim());
        let order_id = OrderId::new(request.order_id.trim());

        if let Err(e) =
            self.verifier
                .verify(&gateway_order_id, &gateway_payment_id, &request.signature)
        {
            tracing::warn!(
                order_id = %order_id,
                gateway_order_id = %gateway_order_id,
                "Payment signature mismatch"
            );
            return Err(e.into());
        }

        let mut order = self
            .order_repo
            .find_by_id(&order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_id: order_id.to_string(),
            })?;

        let expected_version = order.version();
        let newly_paid = match order.confirm_payment(&gateway_order_id, gateway_payment_id) {
            Ok(changed) => changed,
            Err(e) => {
                tracing::warn!(
                    order_id = %order_id,
                    gateway_order_id = %gateway_order_id,
                    "Payment does not belong to order"
                );
                return Err(e.into());
            }
        };

        if !newly_paid {
            return Ok(VerifyPaymentResultDto {
                success: true,
                message: "Payment already verified".to_string(),
            });
        }

        self.order_repo.update(&order, expected_version).await?;
        tracing::info!(order_id = %order_id, gateway_order_id = %gateway_order_id, "Payment verified");

        let events = order.drain_events();
        if let Err(e) = self.event_publisher.publish_order_events(events).await {
            tracing::error!(order_id = %order_id, error = %e, "Failed to publish order events");
        }

        Ok(VerifyPaymentResultDto {
            success: true,
            message: "Payment verified and updated".to_string(),
        })
    }
}
