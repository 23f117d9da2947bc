//! Order DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::{RestaurantContact, UserContact};
use crate::domain::order_fulfillment::aggregate::Order;
use crate::domain::order_fulfillment::value_objects::{OrderStatus, OrderType, PaymentMethod};
use crate::domain::shared::Timestamp;

/// One requested line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDto {
    /// Menu item ID.
    #[serde(default)]
    pub menu_item_id: String,
    /// Requested quantity; must be at least 1.
    pub quantity: i64,
}

/// DTO for creating an order. The user comes from the authenticated principal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    /// Restaurant ID.
    #[serde(default)]
    pub restaurant_id: String,
    /// `HOME_DELIVERY` or `DINE_IN_ADVANCE`.
    #[serde(default)]
    pub order_type: String,
    /// Requested items.
    #[serde(default, alias = "menuItems")]
    pub line_items: Vec<LineItemDto>,
    /// Delivery address (home delivery).
    #[serde(default)]
    pub delivery_address: Option<String>,
    /// RFC 3339 meal time (dine-in).
    #[serde(default)]
    pub meal_time: Option<String>,
    /// Payment method, defaults to `ONLINE_PAYMENT`.
    #[serde(default)]
    pub payment_method: Option<String>,
}

/// Result of creating an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedDto {
    /// Order ID.
    pub id: String,
    /// Total amount.
    pub total_amount: Decimal,
    /// Status (always `PENDING`).
    pub status: OrderStatus,
    /// Order type.
    pub order_type: OrderType,
}

impl OrderCreatedDto {
    /// Create from domain Order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            total_amount: order.total_amount().amount(),
            status: order.status(),
            order_type: order.order_type(),
        }
    }
}

/// DTO for a status change request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusDto {
    /// Requested status.
    #[serde(default)]
    pub status: String,
}

/// Item name and quantity for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemViewDto {
    /// Menu item name at the time of ordering.
    pub name: String,
    /// Quantity.
    pub quantity: u32,
}

fn item_views(order: &Order) -> Vec<OrderItemViewDto> {
    order
        .lines()
        .iter()
        .map(|line| OrderItemViewDto {
            name: line.name().to_string(),
            quantity: line.quantity(),
        })
        .collect()
}

/// Denormalized order returned after a status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusViewDto {
    /// Order ID.
    pub order_id: String,
    /// Customer name, if the directory knows the user.
    pub user_name: Option<String>,
    /// New status.
    pub status: OrderStatus,
    /// Derived activity flag.
    pub is_active: bool,
    /// Items.
    pub items: Vec<OrderItemViewDto>,
    /// Total amount.
    pub total_amount: Decimal,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Delivery address (home delivery).
    pub delivery_address: Option<String>,
    /// Meal time (dine-in).
    pub meal_time: Option<Timestamp>,
    /// Order type.
    pub order_type: OrderType,
    /// Concurrency version after the change.
    pub version: u64,
}

impl OrderStatusViewDto {
    /// Create from domain Order and the customer's contact.
    #[must_use]
    pub fn from_order(order: &Order, user: Option<&UserContact>) -> Self {
        Self {
            order_id: order.id().to_string(),
            user_name: user.map(|u| u.name.clone()),
            status: order.status(),
            is_active: order.is_active(),
            items: item_views(order),
            total_amount: order.total_amount().amount(),
            payment_method: order.payment_method(),
            delivery_address: order.delivery_address().map(str::to_string),
            meal_time: order.meal_time(),
            order_type: order.order_type(),
            version: order.version(),
        }
    }
}

/// A diner's view of one of their orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOrderSummaryDto {
    /// Order ID.
    pub id: String,
    /// Order type.
    pub order_type: OrderType,
    /// Delivery address (home delivery).
    pub delivery_address: Option<String>,
    /// Meal time (dine-in).
    pub meal_time: Option<Timestamp>,
    /// Status.
    pub status: OrderStatus,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Total amount.
    pub total_amount: Decimal,
    /// Paid flag.
    pub is_paid: bool,
    /// Items.
    pub items: Vec<OrderItemViewDto>,
    /// Derived activity flag.
    pub is_active: bool,
    /// Restaurant name.
    pub restaurant_name: Option<String>,
    /// Restaurant street address.
    pub restaurant_address: Option<String>,
    /// Restaurant e-mail.
    pub restaurant_email: Option<String>,
    /// Created at.
    pub created_at: Timestamp,
}

impl UserOrderSummaryDto {
    /// Create from domain Order and the restaurant's contact.
    #[must_use]
    pub fn from_order(order: &Order, restaurant: Option<&RestaurantContact>) -> Self {
        Self {
            id: order.id().to_string(),
            order_type: order.order_type(),
            delivery_address: order.delivery_address().map(str::to_string),
            meal_time: order.meal_time(),
            status: order.status(),
            payment_method: order.payment_method(),
            total_amount: order.total_amount().amount(),
            is_paid: order.is_paid(),
            items: item_views(order),
            is_active: order.is_active(),
            restaurant_name: restaurant.map(|r| r.name.clone()),
            restaurant_address: restaurant.and_then(|r| r.location.clone()),
            restaurant_email: restaurant.map(|r| r.email.clone()),
            created_at: order.created_at(),
        }
    }
}

/// A restaurant's view of an incoming or past order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantOrderSummaryDto {
    /// Order ID.
    pub order_id: String,
    /// Customer name.
    pub user_name: Option<String>,
    /// Customer phone.
    pub phone_number: Option<String>,
    /// Order type.
    pub order_type: OrderType,
    /// Delivery address (home delivery).
    pub delivery_address: Option<String>,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Items.
    pub ordered_items: Vec<OrderItemViewDto>,
    /// Total amount.
    pub total_amount: Decimal,
    /// Status.
    pub status: OrderStatus,
    /// Meal time (dine-in).
    pub meal_time: Option<Timestamp>,
    /// Paid flag.
    pub is_paid: bool,
    /// Created at.
    pub created_at: Timestamp,
}

impl RestaurantOrderSummaryDto {
    /// Create from domain Order and the customer's contact.
    #[must_use]
    pub fn from_order(order: &Order, user: Option<&UserContact>) -> Self {
        Self {
            order_id: order.id().to_string(),
            user_name: user.map(|u| u.name.clone()),
            phone_number: user.and_then(|u| u.phone.clone()),
            order_type: order.order_type(),
            delivery_address: order.delivery_address().map(str::to_string),
            payment_method: order.payment_method(),
            ordered_items: item_views(order),
            total_amount: order.total_amount().amount(),
            status: order.status(),
            meal_time: order.meal_time(),
            is_paid: order.is_paid(),
            created_at: order.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_order_accepts_menu_items_alias() {
        let json = r#"{
            "restaurantId": "rest-1",
            "orderType": "HOME_DELIVERY",
            "menuItems": [{"menuItemId": "item-a", "quantity": 2}],
            "deliveryAddress": "12 MG Road"
        }"#;

        let dto: CreateOrderDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.line_items.len(), 1);
        assert_eq!(dto.line_items[0].quantity, 2);
        assert!(dto.payment_method.is_none());
        assert!(dto.meal_time.is_none());
    }

    #[test]
    fn create_order_tolerates_missing_fields() {
        let dto: CreateOrderDto = serde_json::from_str("{}").unwrap();
        assert!(dto.restaurant_id.is_empty());
        assert!(dto.line_items.is_empty());
    }
}
