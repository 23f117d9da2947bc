//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};

use crate::application::dto::{
    CreateOrderDto, CreatePaymentIntentDto, NotificationResentDto, OrderCreatedDto,
    OrderStatusViewDto, PaymentIntentDto, ResendNotificationDto, RestaurantOrderSummaryDto,
    UpdateOrderStatusDto, UserOrderSummaryDto, VerifyPaymentDto, VerifyPaymentResultDto,
};
use crate::application::ports::{
    CatalogPort, ContactDirectoryPort, EventPublisherPort, NotificationSenderPort,
    PaymentGatewayPort,
};
use crate::application::services::{Notice, UnknownNotice};
use crate::application::use_cases::{
    CreatePaymentIntentUseCase, ListOrdersUseCase, PlaceOrderUseCase, ResendNotificationUseCase,
    UpdateOrderStatusUseCase, VerifyPaymentUseCase,
};
use crate::domain::order_fulfillment::repository::OrderRepository;
use crate::domain::shared::OrderId;
use crate::error::ServiceError;

use super::principal::{RestaurantPrincipal, UserPrincipal};
use super::response::HealthResponse;

/// Application state shared across handlers.
pub struct AppState<O, C, D, G, E, S>
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    /// Use case for placing orders.
    pub place_order: Arc<PlaceOrderUseCase<O, C, E>>,
    /// Use case for status changes.
    pub update_order_status: Arc<UpdateOrderStatusUseCase<O, D, E>>,
    /// Use case for order listings.
    pub list_orders: Arc<ListOrdersUseCase<O, D>>,
    /// Use case for payment intents.
    pub create_payment_intent: Arc<CreatePaymentIntentUseCase<O, G>>,
    /// Use case for payment verification.
    pub verify_payment: Arc<VerifyPaymentUseCase<O, E>>,
    /// Use case for on-demand notification re-sends.
    pub resend_notification: Arc<ResendNotificationUseCase<O, D, S>>,
    /// Application version.
    pub version: String,
}

impl<O, C, D, G, E, S> Clone for AppState<O, C, D, G, E, S>
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    fn clone(&self) -> Self {
        Self {
            place_order: Arc::clone(&self.place_order),
            update_order_status: Arc::clone(&self.update_order_status),
            list_orders: Arc::clone(&self.list_orders),
            create_payment_intent: Arc::clone(&self.create_payment_intent),
            verify_payment: Arc::clone(&self.verify_payment),
            resend_notification: Arc::clone(&self.resend_notification),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<O, C, D, G, E, S>(state: AppState<O, C, D, G, E, S>) -> Router
where
    O: OrderRepository + 'static,
    C: CatalogPort + 'static,
    D: ContactDirectoryPort + 'static,
    G: PaymentGatewayPort + 'static,
    E: EventPublisherPort + 'static,
    S: NotificationSenderPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/orders", post(place_order))
        .route("/api/v1/orders/user", get(list_user_orders))
        .route("/api/v1/orders/restaurant", get(list_active_restaurant_orders))
        .route(
            "/api/v1/orders/restaurant/inactive",
            get(list_inactive_restaurant_orders),
        )
        .route("/api/v1/orders/{order_id}/status", put(update_order_status))
        .route("/api/v1/payments/intent", post(create_payment_intent))
        .route("/api/v1/payments/verify", post(verify_payment))
        .route("/api/v1/notifications/{notice}", post(resend_notification))
        .with_state(state)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServiceError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ServiceError::invalid_request(rejection.body_text()))
}

fn require(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::invalid_request(format!("'{field}' is required"))
            .with_context("field", field));
    }
    Ok(())
}

/// Health check endpoint.
async fn health_check<O, C, D, G, E, S>(
    State(state): State<AppState<O, C, D, G, E, S>>,
) -> impl IntoResponse
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Place order endpoint.
async fn place_order<O, C, D, G, E, S>(
    State(state): State<AppState<O, C, D, G, E, S>>,
    UserPrincipal(user_id): UserPrincipal,
    payload: Result<Json<CreateOrderDto>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderCreatedDto>), ServiceError>
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    let request = body(payload)?;
    let created = state.place_order.execute(user_id, request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Caller's order history.
async fn list_user_orders<O, C, D, G, E, S>(
    State(state): State<AppState<O, C, D, G, E, S>>,
    UserPrincipal(user_id): UserPrincipal,
) -> Result<Json<Vec<UserOrderSummaryDto>>, ServiceError>
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    Ok(Json(state.list_orders.for_user(&user_id).await?))
}

/// Restaurant's open orders.
async fn list_active_restaurant_orders<O, C, D, G, E, S>(
    State(state): State<AppState<O, C, D, G, E, S>>,
    RestaurantPrincipal(restaurant_id): RestaurantPrincipal,
) -> Result<Json<Vec<RestaurantOrderSummaryDto>>, ServiceError>
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    Ok(Json(
        state
            .list_orders
            .for_restaurant(&restaurant_id, true)
            .await?,
    ))
}

/// Restaurant's completed and cancelled orders.
async fn list_inactive_restaurant_orders<O, C, D, G, E, S>(
    State(state): State<AppState<O, C, D, G, E, S>>,
    RestaurantPrincipal(restaurant_id): RestaurantPrincipal,
) -> Result<Json<Vec<RestaurantOrderSummaryDto>>, ServiceError>
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    Ok(Json(
        state
            .list_orders
            .for_restaurant(&restaurant_id, false)
            .await?,
    ))
}

/// Status update endpoint.
async fn update_order_status<O, C, D, G, E, S>(
    State(state): State<AppState<O, C, D, G, E, S>>,
    RestaurantPrincipal(restaurant_id): RestaurantPrincipal,
    Path(order_id): Path<String>,
    payload: Result<Json<UpdateOrderStatusDto>, JsonRejection>,
) -> Result<Json<OrderStatusViewDto>, ServiceError>
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    let request = body(payload)?;
    let view = state
        .update_order_status
        .execute(&restaurant_id, &OrderId::new(order_id), &request.status)
        .await?;
    Ok(Json(view))
}

/// Payment intent endpoint.
async fn create_payment_intent<O, C, D, G, E, S>(
    State(state): State<AppState<O, C, D, G, E, S>>,
    UserPrincipal(user_id): UserPrincipal,
    payload: Result<Json<CreatePaymentIntentDto>, JsonRejection>,
) -> Result<Json<PaymentIntentDto>, ServiceError>
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    let request = body(payload)?;
    require("orderId", &request.order_id)?;
    let intent = state
        .create_payment_intent
        .execute(&user_id, &OrderId::new(request.order_id.trim()))
        .await?;
    Ok(Json(intent))
}

/// Payment verification endpoint.
async fn verify_payment<O, C, D, G, E, S>(
    State(state): State<AppState<O, C, D, G, E, S>>,
    payload: Result<Json<VerifyPaymentDto>, JsonRejection>,
) -> Result<Json<VerifyPaymentResultDto>, ServiceError>
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    let request = body(payload)?;
    require("gatewayOrderId", &request.gateway_order_id)?;
    require("gatewayPaymentId", &request.gateway_payment_id)?;
    require("signature", &request.signature)?;
    require("orderId", &request.order_id)?;
    Ok(Json(state.verify_payment.execute(request).await?))
}

/// Re-send one notice for an order.
async fn resend_notification<O, C, D, G, E, S>(
    State(state): State<AppState<O, C, D, G, E, S>>,
    Path(notice): Path<String>,
    payload: Result<Json<ResendNotificationDto>, JsonRejection>,
) -> Result<Json<NotificationResentDto>, ServiceError>
where
    O: OrderRepository,
    C: CatalogPort,
    D: ContactDirectoryPort,
    G: PaymentGatewayPort,
    E: EventPublisherPort,
    S: NotificationSenderPort,
{
    let notice: Notice = notice.parse().map_err(|e: UnknownNotice| {
        ServiceError::invalid_request(e.to_string()).with_context("notification", e.0)
    })?;
    let request = body(payload)?;
    require("orderId", &request.order_id)?;
    let resent = state
        .resend_notification
        .execute(&OrderId::new(request.order_id.trim()), notice)
        .await?;
    Ok(Json(resent))
}
