//! DTO for the display snapshot endpoint.

use serde::Serialize;

/// Current state of the dashboard counter.
#[derive(Debug, Serialize)]
pub struct DisplayResponse {
    /// Value the display pipeline last rendered.
    pub value: u64,
    /// Orders counted for the current day. May briefly run ahead of `value`
    /// while an update is still in flight.
    pub orders_today: u64,
}
