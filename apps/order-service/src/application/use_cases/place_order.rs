//! Place Order Use Case

use std::sync::Arc;

use crate::application::dto::{CreateOrderDto, LineItemDto, OrderCreatedDto};
use crate::application::errors::UseCaseError;
use crate::application::ports::{CatalogPort, EventPublisherPort};
use crate::application::services::CatalogValidator;
use crate::domain::order_fulfillment::aggregate::{Order, PlaceOrderCommand};
use crate::domain::order_fulfillment::errors::OrderError;
use crate::domain::order_fulfillment::repository::OrderRepository;
use crate::domain::order_fulfillment::services::{
    DuplicateOrderGuard, OrderFingerprint, OrderTypePolicy,
};
use crate::domain::order_fulfillment::value_objects::{ItemSelection, OrderType, PaymentMethod};
use crate::domain::shared::{MenuItemId, RestaurantId, Timestamp, UserId};

/// Use case for placing a new order.
pub struct PlaceOrderUseCase<O, C, E>
where
    O: OrderRepository,
    C: CatalogPort,
    E: EventPublisherPort,
{
    order_repo: Arc<O>,
    catalog_validator: CatalogValidator<C>,
    event_publisher: Arc<E>,
}

impl<O, C, E> PlaceOrderUseCase<O, C, E>
where
    O: OrderRepository,
    C: CatalogPort,
    E: EventPublisherPort,
{
    /// Create a new `PlaceOrderUseCase`.
    pub const fn new(order_repo: Arc<O>, catalog: Arc<C>, event_publisher: Arc<E>) -> Self {
        Self {
            order_repo,
            catalog_validator: CatalogValidator::new(catalog),
            event_publisher,
        }
    }

    /// Validate, price, deduplicate and persist a new order.
    ///
    /// Nothing is written unless every check passes. The `OrderPlaced`
    /// event is published after the insert and is not awaited.
    ///
    /// # Errors
    ///
    /// Validation errors, `ItemNotFound`, `DuplicateOrder`, or a catalog
    /// dependency failure.
    pub async fn execute(
        &self,
        user_id: UserId,
        request: CreateOrderDto,
    ) -> Result<OrderCreatedDto, UseCaseError> {
        let restaurant_id = RestaurantId::new(request.restaurant_id.trim());
        if restaurant_id.is_blank() {
            return Err(OrderError::InvalidParameters {
                field: "restaurantId".to_string(),
                message: "Restaurant ID is required".to_string(),
            }
            .into());
        }

        let selections = parse_line_items(&request.line_items)?;
        let order_type: OrderType = request.order_type.trim().parse()?;
        let payment_method = match request.payment_method.as_deref().map(str::trim) {
            None | Some("") => PaymentMethod::default(),
            Some(raw) => raw.parse()?,
        };
        // Home delivery ignores mealTime, malformed or not.
        let meal_time = match order_type {
            OrderType::DineInAdvance => request
                .meal_time
                .as_deref()
                .map(parse_meal_time)
                .transpose()?,
            OrderType::HomeDelivery => None,
        };

        let fulfillment = OrderTypePolicy::resolve(
            order_type,
            request.delivery_address.as_deref(),
            meal_time,
            Timestamp::now(),
        )?;

        self.reject_known_duplicate(&user_id, &restaurant_id, order_type, &selections)
            .await?;

        let lines = self
            .catalog_validator
            .price(&restaurant_id, &selections)
            .await?;

        let mut order = Order::place(PlaceOrderCommand {
            user_id,
            restaurant_id,
            fulfillment,
            payment_method,
            lines,
        })?;

        if let Err(e) = self.order_repo.insert_unless_duplicate(&order).await {
            if let OrderError::DuplicateOrder { existing_order_id } = &e {
                tracing::info!(
                    existing_order_id = %existing_order_id,
                    user_id = %order.user_id(),
                    "Duplicate order submission rejected"
                );
            }
            return Err(e.into());
        }

        tracing::info!(
            order_id = %order.id(),
            restaurant_id = %order.restaurant_id(),
            total_amount = %order.total_amount(),
            order_type = %order.order_type(),
            "Order placed"
        );

        let events = order.drain_events();
        if let Err(e) = self.event_publisher.publish_order_events(events).await {
            tracing::error!(order_id = %order.id(), error = %e, "Failed to publish order events");
        }

        Ok(OrderCreatedDto::from_order(&order))
    }

    /// Fail fast on a resubmission already stored, before the catalog is
    /// consulted. `insert_unless_duplicate` still decides races.
    async fn reject_known_duplicate(
        &self,
        user_id: &UserId,
        restaurant_id: &RestaurantId,
        order_type: OrderType,
        selections: &[ItemSelection],
    ) -> Result<(), UseCaseError> {
        let candidate = OrderFingerprint::from_selections(
            user_id.clone(),
            restaurant_id.clone(),
            order_type,
            selections,
        );
        let existing = self.order_repo.find_by_user(user_id).await?;
        match DuplicateOrderGuard::find_duplicate(&candidate, &existing) {
            Some(order) => {
                tracing::info!(
                    existing_order_id = %order.id(),
                    user_id = %user_id,
                    "Duplicate order submission rejected before pricing"
                );
                Err(OrderError::DuplicateOrder {
                    existing_order_id: order.id().to_string(),
                }
                .into())
            }
            None => Ok(()),
        }
    }
}

fn parse_line_items(items: &[LineItemDto]) -> Result<Vec<ItemSelection>, OrderError> {
    if items.is_empty() {
        return Err(OrderError::EmptyOrder);
    }
    items
        .iter()
        .map(|item| {
            let invalid = || OrderError::InvalidQuantity {
                menu_item_id: item.menu_item_id.clone(),
                quantity: item.quantity,
            };
            let quantity = u32::try_from(item.quantity).map_err(|_| invalid())?;
            ItemSelection::new(MenuItemId::new(item.menu_item_id.trim()), quantity)
                .map_err(|_| invalid())
        })
        .collect()
}

fn parse_meal_time(raw: &str) -> Result<Timestamp, OrderError> {
    Timestamp::parse(raw.trim()).map_err(|e| OrderError::InvalidParameters {
        field: "mealTime".to_string(),
        message: format!("Meal time must be an RFC 3339 timestamp: {e}"),
    })
}
