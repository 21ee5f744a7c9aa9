//! DTOs for the order intake endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to record one order.
///
/// Field names match the upstream order feed (camelCase).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordOrderRequest {
    /// When the order was placed (RFC 3339).
    pub date_order: DateTime<Utc>,

    /// Order amount; must be non-negative.
    #[validate(range(min = 0.0, message = "totalOrder must be non-negative"))]
    pub total_order: f64,

    #[validate(length(min = 1, max = 50))]
    pub payment_type: String,

    #[validate(length(min = 1, max = 50))]
    pub delivery_type: String,
}

/// Acknowledgement that an order was queued for processing.
#[derive(Debug, Serialize)]
pub struct RecordOrderResponse {
    pub status: &'static str,
}
