//! E2E Integration Tests for the Order Lifecycle
//!
//! Drives the production wiring (config → container → HTTP router → use cases
//! → notification worker) with wiremock standing in for the payment gateway
//! and the mail relay.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::str::FromStr;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use order_service::application::services::PaymentSignatureVerifier;
use order_service::config::load_config_from_string;
use order_service::domain::shared::{GatewayOrderId, GatewayPaymentId};
use order_service::infrastructure::config::{ServiceContainer, build_container};
use order_service::infrastructure::http::create_router;

const KEY_SECRET: &str = "rzp_test_secret";
const USER: (&str, &str) = ("x-user-id", "user-1");
const RESTAURANT: (&str, &str) = ("x-restaurant-id", "rest-1");

fn config_yaml(gateway_url: &str, relay_url: &str) -> String {
    format!(
        r#"
payment:
  gateway_base_url: "{gateway_url}"
  key_id: rzp_test_key
  key_secret: {KEY_SECRET}
  currency: INR

notifications:
  sender: webhook
  webhook_url: "{relay_url}/relay"
  from_address: "orders@platform.example"
  queue_capacity: 64

catalog:
  items:
    - id: item-a
      restaurant_id: rest-1
      name: Paneer Tikka
      price: "10"
    - id: item-b
      restaurant_id: rest-1
      name: Mango Lassi
      price: "5"

directory:
  users:
    - id: user-1
      name: Asha
      email: asha@example.com
      phone: "+91-98450-00000"
  restaurants:
    - id: rest-1
      name: Spice Route
      email: kitchen@spiceroute.example
      location: 4 Brigade Road
"#
    )
}

async fn start_gateway() -> MockServer {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "order_GW1",
            "entity": "order",
            "amount": 2500,
            "currency": "INR",
            "status": "created"
        })))
        .mount(&gateway)
        .await;
    gateway
}

async fn start_relay() -> MockServer {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/relay"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&relay)
        .await;
    relay
}

fn build(
    gateway: &MockServer,
    relay: &MockServer,
) -> (
    ServiceContainer,
    Router,
    tokio::sync::mpsc::Receiver<order_service::OrderEvent>,
) {
    let config = load_config_from_string(&config_yaml(&gateway.uri(), &relay.uri())).unwrap();
    let (container, receiver) = build_container(&config).unwrap();
    let router = create_router(container.app_state("e2e"));
    (container, router, receiver)
}

fn json_request(
    method: &str,
    uri: &str,
    principal: Option<(&str, &str)>,
    body: &Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some((name, value)) = principal {
        builder = builder.header(name, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, principal: (&str, &str)) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(principal.0, principal.1)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().unwrap()).unwrap()
}

fn order_body() -> Value {
    json!({
        "restaurantId": "rest-1",
        "orderType": "HOME_DELIVERY",
        "lineItems": [
            {"menuItemId": "item-a", "quantity": 2},
            {"menuItemId": "item-b", "quantity": 1}
        ],
        "deliveryAddress": "12 MG Road",
        "paymentMethod": "ONLINE_PAYMENT"
    })
}

async fn set_status(app: &Router, order_id: &str, status: &str) -> (StatusCode, Value) {
    send(
        app,
        json_request(
            "PUT",
            &format!("/api/v1/orders/{order_id}/status"),
            Some(RESTAURANT),
            &json!({ "status": status }),
        ),
    )
    .await
}

#[tokio::test]
async fn test_order_lifecycle_end_to_end() {
    let gateway = start_gateway().await;
    let relay = start_relay().await;
    let (container, app, receiver) = build(&gateway, &relay);
    let worker = tokio::spawn(container.notification_dispatcher().run(receiver));

    // Place: 2 × 10 + 1 × 5
    let (status, created) = send(
        &app,
        json_request("POST", "/api/v1/orders", Some(USER), &order_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "PENDING");
    assert_eq!(decimal(&created["totalAmount"]), dec!(25));
    let order_id = created["id"].as_str().unwrap().to_string();

    // Kitchen progress
    for next in ["PREPARING", "READY", "COMPLETED"] {
        let (status, view) = set_status(&app, &order_id, next).await;
        assert_eq!(status, StatusCode::OK, "transition to {next}: {view}");
        assert_eq!(view["status"], next);
    }

    let (_, inactive) = send(
        &app,
        get_request("/api/v1/orders/restaurant/inactive", RESTAURANT),
    )
    .await;
    assert_eq!(inactive.as_array().unwrap().len(), 1);
    assert_eq!(inactive[0]["orderId"], order_id.as_str());

    // Payment intent
    let (status, intent) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/payments/intent",
            Some(USER),
            &json!({ "orderId": order_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{intent}");
    assert_eq!(intent["orderId"], "order_GW1");
    assert_eq!(intent["amount"], 2500);
    assert_eq!(intent["currency"], "INR");

    // Verification with a correctly computed signature
    let signature = PaymentSignatureVerifier::new(KEY_SECRET).sign(
        &GatewayOrderId::new("order_GW1"),
        &GatewayPaymentId::new("pay_1"),
    );
    let (status, verified) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/payments/verify",
            None,
            &json!({
                "razorpay_order_id": "order_GW1",
                "razorpay_payment_id": "pay_1",
                "razorpay_signature": signature,
                "orderId": order_id
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["success"], true);

    let (_, orders) = send(&app, get_request("/api/v1/orders/user", USER)).await;
    let summary = &orders[0];
    assert_eq!(summary["id"], order_id.as_str());
    assert_eq!(summary["isActive"], false);
    assert_eq!(summary["isPaid"], true);
    assert_eq!(summary["restaurantName"], "Spice Route");
    assert_eq!(summary["restaurantAddress"], "4 Brigade Road");

    // Closing the queue lets the worker drain and stop.
    drop(app);
    drop(container);
    tokio::time::timeout(Duration::from_secs(5), worker)
        .await
        .unwrap()
        .unwrap();

    // Placed: user + restaurant. Completed: user.
    let delivered = relay.received_requests().await.unwrap();
    assert_eq!(delivered.len(), 3);
    let recipients: Vec<String> = delivered
        .iter()
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).unwrap();
            body["to"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(
        recipients
            .iter()
            .filter(|to| to.as_str() == "asha@example.com")
            .count(),
        2
    );
    assert!(recipients.contains(&"kitchen@spiceroute.example".to_string()));
}

#[tokio::test]
async fn test_tampered_signature_never_marks_paid() {
    let gateway = start_gateway().await;
    let relay = start_relay().await;
    let (_container, app, _receiver) = build(&gateway, &relay);

    let (_, created) = send(
        &app,
        json_request("POST", "/api/v1/orders", Some(USER), &order_body()),
    )
    .await;
    let order_id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/payments/intent",
            Some(USER),
            &json!({ "orderId": order_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/payments/verify",
            None,
            &json!({
                "gatewayOrderId": "order_GW1",
                "gatewayPaymentId": "pay_1",
                "signature": "00".repeat(32),
                "orderId": order_id
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "PAYMENT_VERIFICATION_FAILED");

    let (_, orders) = send(&app, get_request("/api/v1/orders/user", USER)).await;
    assert_eq!(orders[0]["isPaid"], false);
}

#[tokio::test]
async fn test_illegal_transition_is_rejected() {
    let gateway = start_gateway().await;
    let relay = start_relay().await;
    let (_container, app, _receiver) = build(&gateway, &relay);

    let (_, created) = send(
        &app,
        json_request("POST", "/api/v1/orders", Some(USER), &order_body()),
    )
    .await;
    let order_id = created["id"].as_str().unwrap().to_string();

    let (status, body) = set_status(&app, &order_id, "COMPLETED").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");

    let (status, body) = set_status(&app, "missing-order", "PREPARING").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ORDER_NOT_FOUND");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_identical_submissions_create_one_order() {
    let gateway = start_gateway().await;
    let relay = start_relay().await;
    let (container, app, _receiver) = build(&gateway, &relay);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    json_request("POST", "/api/v1/orders", Some(USER), &order_body()),
                )
                .await
            })
        })
        .collect();

    let mut created = 0;
    let mut duplicates = 0;
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        match status {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => {
                assert_eq!(body["code"], "DUPLICATE_ORDER");
                duplicates += 1;
            }
            other => panic!("unexpected status {other}: {body}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(duplicates, 15);
    assert_eq!(container.order_repo().len(), 1);
}

#[tokio::test]
async fn test_resend_notification_reaches_relay() {
    let gateway = start_gateway().await;
    let relay = start_relay().await;
    // No worker: only the re-send reaches the relay.
    let (_container, app, _receiver) = build(&gateway, &relay);

    let (_, created) = send(
        &app,
        json_request("POST", "/api/v1/orders", Some(USER), &order_body()),
    )
    .await;
    let order_id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/notifications/restaurant-order-arrived",
            None,
            &json!({ "orderId": order_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["delivered"], 1);

    let delivered = relay.received_requests().await.unwrap();
    assert_eq!(delivered.len(), 1);
    let message: Value = serde_json::from_slice(&delivered[0].body).unwrap();
    assert_eq!(message["to"], "kitchen@spiceroute.example");

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/notifications/user-order-placed",
            None,
            &json!({ "orderId": "missing" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ORDER_NOT_FOUND");
}
