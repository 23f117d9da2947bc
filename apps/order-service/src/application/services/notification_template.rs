//! Rendering of order notification messages.

use std::fmt::Write as _;

use crate::application::ports::{OutboundMessage, RestaurantContact, UserContact};
use crate::domain::order_fulfillment::aggregate::Order;

const NOT_PROVIDED: &str = "Not provided";

/// "New order" message to the restaurant.
#[must_use]
pub fn order_arrived_for_restaurant(
    order: &Order,
    user: &UserContact,
    restaurant: &RestaurantContact,
) -> OutboundMessage {
    let mut text = String::from("New Order Received!\n");
    let _ = writeln!(text, "Order ID: {}", order.id());
    text.push_str("Ordered Items:\n");
    text.push_str(&item_lines(order));
    if let Some(address) = order.delivery_address() {
        let _ = writeln!(text, "Delivery Address: {address}");
    }
    if let Some(meal_time) = order.meal_time() {
        let _ = writeln!(text, "Meal Time: {meal_time}");
    }
    let _ = writeln!(text, "Order Type: {}", order.order_type());
    let _ = writeln!(text, "Payment Method: {}", order.payment_method());
    let _ = writeln!(text, "Total Amount: {}", order.total_amount());
    text.push_str("\nCustomer Details:\n");
    let _ = writeln!(text, "Name: {}", user.name);
    let _ = writeln!(text, "Phone: {}", user.phone.as_deref().unwrap_or(NOT_PROVIDED));

    message(&restaurant.email, "New Order Arrived!", text)
}

/// "Order placed" confirmation to the diner.
#[must_use]
pub fn order_placed_for_user(
    order: &Order,
    user: &UserContact,
    restaurant: &RestaurantContact,
) -> OutboundMessage {
    let mut text = String::from("Your Order has been Placed!\n\nOrder Details:\n");
    let _ = writeln!(text, "Order ID: {}", order.id());
    text.push_str("Items Ordered:\n");
    text.push_str(&item_lines(order));
    text.push_str("\nRestaurant Details:\n");
    let _ = writeln!(text, "Name: {}", restaurant.name);
    let _ = writeln!(text, "Email: {}", restaurant.email);
    let _ = writeln!(
        text,
        "Phone: {}",
        restaurant.phone.as_deref().unwrap_or(NOT_PROVIDED)
    );
    text.push_str("\nWe are preparing your meal and will notify you when it's ready!\n");

    message(&user.email, "Your Order has been Placed!", text)
}

/// "Order ready" message to the diner.
#[must_use]
pub fn order_completed_for_user(order: &Order, user: &UserContact) -> OutboundMessage {
    let mut text = String::from("Your Order is Ready for Pickup or Delivery!\n\nOrder Details:\n");
    let _ = writeln!(text, "Order ID: {}", order.id());
    text.push_str("Items Ordered:\n");
    text.push_str(&item_lines(order));
    text.push_str("\nThank you for choosing us!\n");

    message(&user.email, "Your Order is Ready!", text)
}

/// "Order cancelled" message to the diner.
#[must_use]
pub fn order_cancelled_for_user(order: &Order, user: &UserContact) -> OutboundMessage {
    let mut text =
        String::from("We regret to inform you that your order has been cancelled.\n\nOrder Details:\n");
    let _ = writeln!(text, "Order ID: {}", order.id());
    text.push_str("Items Ordered:\n");
    text.push_str(&item_lines(order));
    text.push_str("\nWe apologize for any inconvenience caused.\n");

    message(&user.email, "Your Order has been Cancelled", text)
}

fn item_lines(order: &Order) -> String {
    order.lines().iter().fold(String::new(), |mut out, line| {
        let _ = writeln!(out, "{} (Quantity: {})", line.name(), line.quantity());
        out
    })
}

fn message(recipient: &str, subject: &str, text_body: String) -> OutboundMessage {
    let html_body = format!("<p>{}</p>", escape_html(&text_body));
    OutboundMessage {
        recipient: recipient.to_string(),
        subject: subject.to_string(),
        text_body,
        html_body,
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_fulfillment::aggregate::{OrderLine, PlaceOrderCommand};
    use crate::domain::order_fulfillment::value_objects::{Fulfillment, PaymentMethod};
    use crate::domain::shared::{MenuItemId, Money, RestaurantId, UserId};
    use rust_decimal_macros::dec;

    fn order() -> Order {
        Order::place(PlaceOrderCommand {
            user_id: UserId::new("user-1"),
            restaurant_id: RestaurantId::new("rest-1"),
            fulfillment: Fulfillment::HomeDelivery {
                delivery_address: "12 MG Road".to_string(),
            },
            payment_method: PaymentMethod::CashOnDelivery,
            lines: vec![
                OrderLine::new(MenuItemId::new("item-a"), "Masala Dosa", 2, Money::new(dec!(10))),
                OrderLine::new(MenuItemId::new("item-b"), "Mango Lassi", 1, Money::new(dec!(5))),
            ],
        })
        .unwrap()
    }

    fn user(phone: Option<&str>) -> UserContact {
        UserContact {
            id: UserId::new("user-1"),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: phone.map(str::to_string),
        }
    }

    fn restaurant() -> RestaurantContact {
        RestaurantContact {
            id: RestaurantId::new("rest-1"),
            name: "Spice Route".to_string(),
            email: "kitchen@spiceroute.example".to_string(),
            phone: None,
            location: Some("4 Brigade Road".to_string()),
        }
    }

    #[test]
    fn restaurant_message_lists_items_and_customer() {
        let order = order();
        let msg = order_arrived_for_restaurant(&order, &user(None), &restaurant());

        assert_eq!(msg.recipient, "kitchen@spiceroute.example");
        assert_eq!(msg.subject, "New Order Arrived!");
        assert!(msg.text_body.contains("Masala Dosa (Quantity: 2)"));
        assert!(msg.text_body.contains("Mango Lassi (Quantity: 1)"));
        assert!(msg.text_body.contains("Delivery Address: 12 MG Road"));
        assert!(msg.text_body.contains("Payment Method: CASH_ON_DELIVERY"));
        assert!(msg.text_body.contains("Total Amount: 25.00"));
        assert!(msg.text_body.contains("Phone: Not provided"));
    }

    #[test]
    fn user_messages_go_to_user() {
        let order = order();
        let user = user(Some("+91 98450 00000"));

        let placed = order_placed_for_user(&order, &user, &restaurant());
        assert_eq!(placed.recipient, "asha@example.com");
        assert!(placed.text_body.contains("Spice Route"));

        let done = order_completed_for_user(&order, &user);
        assert_eq!(done.subject, "Your Order is Ready!");

        let cancelled = order_cancelled_for_user(&order, &user);
        assert_eq!(cancelled.subject, "Your Order has been Cancelled");
        assert!(cancelled.text_body.contains(order.id().as_str()));
    }

    #[test]
    fn html_body_wraps_escaped_text() {
        let order = order();
        let mut user = user(None);
        user.name = "<b>Asha</b>".to_string();

        let msg = order_arrived_for_restaurant(&order, &user, &restaurant());
        assert!(msg.html_body.starts_with("<p>"));
        assert!(msg.html_body.ends_with("</p>"));
        assert!(msg.html_body.contains("&lt;b&gt;Asha"));
    }
}
