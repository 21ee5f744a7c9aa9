//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Order queue**: Checks if the worker channel is open and reports capacity
/// 2. **Push notifier**: Asks the configured notifier for its status
/// 3. **Display**: Reports the value the display pipeline last rendered
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let queue_check = check_order_queue(&state);

    let push_check = check_push_notifier(&state).await;

    let display_check = check_display(&state);

    let all_healthy = queue_check.status == "ok"
        && push_check.status == "ok"
        && display_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            order_queue: queue_check,
            push_notifier: push_check,
            display: display_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks if the order intake queue is operational.
fn check_order_queue(state: &AppState) -> CheckStatus {
    if state.order_tx.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Order queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", state.order_tx.capacity())),
        }
    }
}

/// Checks the configured push notifier.
async fn check_push_notifier(state: &AppState) -> CheckStatus {
    if state.notifier.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Push notifier unavailable".to_string()),
        }
    }
}

/// Reports the current display mirror value.
fn check_display(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Showing: {}", state.display.get())),
    }
}
