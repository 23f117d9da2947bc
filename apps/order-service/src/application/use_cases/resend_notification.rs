//! Resend Notification Use Case

use std::sync::Arc;

use crate::application::dto::NotificationResentDto;
use crate::application::errors::UseCaseError;
use crate::application::ports::{ContactDirectoryPort, NotificationSenderPort};
use crate::application::services::{Notice, NotificationDispatcher};
use crate::domain::order_fulfillment::repository::OrderRepository;
use crate::domain::shared::OrderId;

/// Use case for sending one lifecycle notice again.
pub struct ResendNotificationUseCase<O, D, S>
where
    O: OrderRepository,
    D: ContactDirectoryPort,
    S: NotificationSenderPort,
{
    dispatcher: NotificationDispatcher<O, D, S>,
}

impl<O, D, S> ResendNotificationUseCase<O, D, S>
where
    O: OrderRepository,
    D: ContactDirectoryPort,
    S: NotificationSenderPort,
{
    /// Create a new `ResendNotificationUseCase`.
    pub const fn new(orders: Arc<O>, directory: Arc<D>, sender: Arc<S>) -> Self {
        Self {
            dispatcher: NotificationDispatcher::new(orders, directory, sender),
        }
    }

    /// Deliver `notice` for the order now, inline with the request.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown order.
    pub async fn execute(
        &self,
        order_id: &OrderId,
        notice: Notice,
    ) -> Result<NotificationResentDto, UseCaseError> {
        let delivered = self.dispatcher.resend(order_id, notice).await?;
        Ok(NotificationResentDto {
            success: true,
            notification: notice.to_string(),
            delivered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::UserContact;
    use crate::infrastructure::notification::LoggingNotificationSender;
    use crate::domain::order_fulfillment::aggregate::{Order, OrderLine, PlaceOrderCommand};
    use crate::domain::order_fulfillment::errors::OrderError;
    use crate::domain::order_fulfillment::value_objects::{Fulfillment, PaymentMethod};
    use crate::domain::shared::{MenuItemId, Money, RestaurantId, UserId};
    use crate::infrastructure::directory::InMemoryContactDirectory;
    use crate::infrastructure::persistence::InMemoryOrderRepository;
    use rust_decimal_macros::dec;

    fn use_case(
        repo: Arc<InMemoryOrderRepository>,
    ) -> ResendNotificationUseCase<InMemoryOrderRepository, InMemoryContactDirectory, LoggingNotificationSender>
    {
        let directory = InMemoryContactDirectory::new();
        directory.add_user(UserContact {
            id: UserId::new("user-1"),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
        });
        ResendNotificationUseCase::new(
            repo,
            Arc::new(directory),
            Arc::new(LoggingNotificationSender),
        )
    }

    #[tokio::test]
    async fn resends_user_notice_for_stored_order() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let order = Order::place(PlaceOrderCommand {
            user_id: UserId::new("user-1"),
            restaurant_id: RestaurantId::new("rest-1"),
            fulfillment: Fulfillment::HomeDelivery {
                delivery_address: "12 MG Road".to_string(),
            },
            payment_method: PaymentMethod::CashOnDelivery,
            lines: vec![OrderLine::new(
                MenuItemId::new("item-a"),
                "Idli",
                3,
                Money::new(dec!(4)),
            )],
        })
        .unwrap();
        repo.insert_unless_duplicate(&order).await.unwrap();

        let resent = use_case(repo)
            .execute(order.id(), Notice::UserOrderCancelled)
            .await
            .unwrap();

        assert!(resent.success);
        assert_eq!(resent.notification, "user-order-cancelled");
        assert_eq!(resent.delivered, 1);
    }

    #[tokio::test]
    async fn missing_restaurant_contact_delivers_nothing() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let order = Order::place(PlaceOrderCommand {
            user_id: UserId::new("user-1"),
            restaurant_id: RestaurantId::new("rest-unlisted"),
            fulfillment: Fulfillment::HomeDelivery {
                delivery_address: "12 MG Road".to_string(),
            },
            payment_method: PaymentMethod::CashOnDelivery,
            lines: vec![OrderLine::new(
                MenuItemId::new("item-a"),
                "Idli",
                1,
                Money::new(dec!(4)),
            )],
        })
        .unwrap();
        repo.insert_unless_duplicate(&order).await.unwrap();

        let resent = use_case(repo)
            .execute(order.id(), Notice::RestaurantOrderArrived)
            .await
            .unwrap();

        assert_eq!(resent.delivered, 0);
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let err = use_case(Arc::new(InMemoryOrderRepository::new()))
            .execute(&OrderId::new("missing"), Notice::UserOrderPlaced)
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::Order(OrderError::NotFound { .. })));
    }
}
