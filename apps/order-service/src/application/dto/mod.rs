//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.
//! JSON field names are camelCase.

mod notification_dto;
mod order_dto;
mod payment_dto;

pub use notification_dto::{NotificationResentDto, ResendNotificationDto};
pub use order_dto::{
    CreateOrderDto, LineItemDto, OrderCreatedDto, OrderItemViewDto, OrderStatusViewDto,
    RestaurantOrderSummaryDto, UpdateOrderStatusDto, UserOrderSummaryDto,
};
pub use payment_dto::{
    CreatePaymentIntentDto, PaymentIntentDto, VerifyPaymentDto, VerifyPaymentResultDto,
};
