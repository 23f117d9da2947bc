//! Use Cases
//!
//! Application-specific business operations. Each use case orchestrates
//! domain objects and ports to fulfill one request.

mod create_payment_intent;
mod list_orders;
mod place_order;
mod resend_notification;
mod update_order_status;
mod verify_payment;

pub use create_payment_intent::CreatePaymentIntentUseCase;
pub use list_orders::ListOrdersUseCase;
pub use place_order::PlaceOrderUseCase;
pub use resend_notification::ResendNotificationUseCase;
pub use update_order_status::UpdateOrderStatusUseCase;
pub use verify_payment::VerifyPaymentUseCase;
