mod common;

use axum::http::StatusCode;
use axum::{Router, routing::post};
use axum_test::TestServer;
use orderboard::api::handlers::record_order_handler;
use serde_json::json;

fn order_payload() -> serde_json::Value {
    json!({
        "dateOrder": "2026-08-29T12:30:00Z",
        "totalOrder": 125.75,
        "paymentType": "card",
        "deliveryType": "delivery"
    })
}

#[tokio::test]
async fn test_record_order_accepted_and_queued() {
    let (state, mut rx) = common::create_test_state();
    let app = Router::new()
        .route("/api/orders", post(record_order_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.post("/api/orders").json(&order_payload()).await;

    response.assert_status(StatusCode::ACCEPTED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "accepted");

    let event = rx.try_recv().unwrap();
    assert_eq!(event.total_order, 125.75);
    assert_eq!(event.payment_type, "card");
    assert_eq!(event.delivery_type, "delivery");
}

#[tokio::test]
async fn test_negative_total_rejected() {
    let (state, mut rx) = common::create_test_state();
    let app = Router::new()
        .route("/api/orders", post(record_order_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let mut payload = order_payload();
    payload["totalOrder"] = json!(-1.0);

    let response = server.post("/api/orders").json(&payload).await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_empty_payment_type_rejected() {
    let (state, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/api/orders", post(record_order_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let mut payload = order_payload();
    payload["paymentType"] = json!("");

    let response = server.post("/api/orders").json(&payload).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let (state, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/api/orders", post(record_order_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/orders")
        .json(&json!({ "totalOrder": 10.0 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_saturated_queue_returns_unavailable() {
    let (state, _rx) = common::create_test_state_with_capacity(1);
    let app = Router::new()
        .route("/api/orders", post(record_order_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    server.post("/api/orders").json(&order_payload()).await
        .assert_status(StatusCode::ACCEPTED);

    let response = server.post("/api/orders").json(&order_payload()).await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "unavailable");
}
