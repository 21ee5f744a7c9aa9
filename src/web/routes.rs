//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    index_handler, legacy_total_daily_orders_handler, total_daily_orders_handler,
};
use axum::{Router, routing::get};

/// Server-rendered page routes.
///
/// # Endpoints
///
/// - `GET /` - Main page
/// - `GET /total-daily-orders` - Daily orders counter page
/// - `GET /TotalDailyOrders` - Permanent redirect to the canonical path
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/total-daily-orders", get(total_daily_orders_handler))
        .route("/TotalDailyOrders", get(legacy_total_daily_orders_handler))
}
