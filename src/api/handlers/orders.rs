//! Handler for the order intake endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use tokio::sync::mpsc::error::TrySendError;
use validator::Validate;

use crate::api::dto::order::{RecordOrderRequest, RecordOrderResponse};
use crate::domain::order_event::OrderEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Records one order and queues it for push processing.
///
/// # Endpoint
///
/// `POST /api/orders`
///
/// # Request Body
///
/// ```json
/// {
///   "dateOrder": "2026-08-29T12:30:00Z",
///   "totalOrder": 125.75,
///   "paymentType": "card",
///   "deliveryType": "delivery"
/// }
/// ```
///
/// # Response
///
/// `202 Accepted` with `{"status": "accepted"}`. The daily counter and any
/// push notifications are handled asynchronously by the background worker,
/// so the response does not carry the new total.
///
/// # Errors
///
/// - `400 Bad Request` on validation failure
/// - `503 Service Unavailable` when the order queue is saturated
pub async fn record_order_handler(
    State(state): State<AppState>,
    Json(req): Json<RecordOrderRequest>,
) -> Result<(StatusCode, Json<RecordOrderResponse>), AppError> {
    req.validate().map_err(|e| {
        AppError::bad_request("Invalid order payload", json!({ "errors": e.to_string() }))
    })?;

    let event = OrderEvent::new(
        req.date_order,
        req.total_order,
        req.payment_type,
        req.delivery_type,
    );

    state.order_tx.try_send(event).map_err(|e| match e {
        TrySendError::Full(_) => {
            tracing::warn!("Order queue saturated, rejecting order");
            AppError::unavailable("Order queue saturated", json!({}))
        }
        TrySendError::Closed(_) => {
            tracing::error!("Order queue closed, worker is gone");
            AppError::internal("Order processing unavailable", json!({}))
        }
    })?;

    Ok((
        StatusCode::ACCEPTED,
        Json(RecordOrderResponse { status: "accepted" }),
    ))
}
