//! Order event model for asynchronous order processing.

use chrono::{DateTime, Utc};

/// An in-memory representation of a recorded order for async processing.
///
/// Used to pass order information from HTTP handlers to the background worker
/// via a channel. This decouples the HTTP response from push publishing,
/// allowing fast acknowledgements without blocking on the notifier.
///
/// # Usage Flow
///
/// 1. Created in the order intake handler from a validated request
/// 2. Sent to channel (non-blocking)
/// 3. Processed by [`crate::domain::push_worker::run_push_worker`]
#[derive(Debug, Clone)]
pub struct OrderEvent {
    /// When the order was placed. Determines which daily bucket it counts toward.
    pub date_order: DateTime<Utc>,
    /// Order amount.
    pub total_order: f64,
    pub payment_type: String,
    pub delivery_type: String,
}

impl OrderEvent {
    /// Creates a new order event.
    pub fn new(
        date_order: DateTime<Utc>,
        total_order: f64,
        payment_type: impl Into<String>,
        delivery_type: impl Into<String>,
    ) -> Self {
        Self {
            date_order,
            total_order,
            payment_type: payment_type.into(),
            delivery_type: delivery_type.into(),
        }
    }
}
