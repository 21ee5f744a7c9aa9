//! API route configuration.

use crate::api::handlers::{display_handler, record_order_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /orders`  - Record an order and queue it for push processing
/// - `GET  /display` - Snapshot of the current display value
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(record_order_handler))
        .route("/display", get(display_handler))
}
