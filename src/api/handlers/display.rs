//! Handler for the display snapshot endpoint.

use axum::{Json, extract::State};

use crate::api::dto::display::DisplayResponse;
use crate::state::AppState;

/// Returns the value the dashboard display currently shows.
///
/// # Endpoint
///
/// `GET /api/display`
///
/// # Response
///
/// ```json
/// {
///   "value": 42,
///   "orders_today": 42
/// }
/// ```
pub async fn display_handler(State(state): State<AppState>) -> Json<DisplayResponse> {
    Json(DisplayResponse {
        value: state.display.get(),
        orders_today: state.counter.current(),
    })
}
