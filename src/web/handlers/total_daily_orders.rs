//! Total daily orders counter page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::state::AppState;
use crate::web::context::PushContext;

/// Query parameters for the counter page.
#[derive(Debug, Deserialize)]
pub struct TotalQuery {
    /// Raw value; coerced to an integer with a 0 fallback.
    total: Option<String>,
}

/// Template for the counter page.
///
/// Renders `templates/total_daily_orders.html` with the initial counter
/// value, the animation length, and push credentials for live updates.
/// The page shell clips horizontal overflow so the rolling digits never
/// produce a scrollbar.
#[derive(Template, WebTemplate)]
#[template(path = "total_daily_orders.html")]
pub struct TotalDailyOrdersTemplate {
    pub push: PushContext,
    pub clip_overflow: bool,
    pub total: u64,
    pub duration_ms: u64,
}

/// Renders the daily orders counter page.
///
/// # Endpoint
///
/// `GET /total-daily-orders?total=<int>`
///
/// A missing or non-numeric `total` renders as 0; the page never fails on
/// malformed input.
pub async fn total_daily_orders_handler(
    State(state): State<AppState>,
    Query(query): Query<TotalQuery>,
) -> impl IntoResponse {
    let total = match query.total.as_deref().map(str::trim) {
        None => 0,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::debug!(raw, "Non-numeric total query value, rendering 0");
            0
        }),
    };

    TotalDailyOrdersTemplate {
        push: PushContext::from(&state.credentials),
        clip_overflow: true,
        total,
        duration_ms: state.odometer_duration_ms,
    }
}

/// Redirects the historical camel-case route to the canonical path.
///
/// # Endpoint
///
/// `GET /TotalDailyOrders` → `308 /total-daily-orders`
pub async fn legacy_total_daily_orders_handler() -> Redirect {
    Redirect::permanent("/total-daily-orders")
}
