//! Push notifier trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Event published when the daily total changes.
pub const TOTAL_UPDATED_EVENT: &str = "total-updated";

/// Event published when the daily count crosses a milestone.
pub const MILESTONE_EVENT: &str = "milestone";

/// Errors that can occur while publishing a push event.
#[derive(Debug)]
pub enum PushError {
    RequestError(String),
    Rejected { status: u16, body: String },
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RequestError(e) => write!(f, "Push request error: {}", e),
            Self::Rejected { status, body } => {
                write!(f, "Push rejected with status {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for PushError {}

/// Result type for push operations.
pub type PushResult<T> = Result<T, PushError>;

/// Trait for publishing events to the dashboard's push channel.
///
/// Implementations must degrade gracefully: a failed publish is logged by the
/// caller and never interrupts order processing or page serving.
///
/// # Implementations
///
/// - [`crate::infrastructure::push::PusherClient`] - Pusher Channels HTTP API
/// - [`crate::infrastructure::push::LogNotifier`] - log-only fallback
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushNotifier: Send + Sync {
    /// Publishes `payload` under `event` on the configured channel.
    ///
    /// # Errors
    ///
    /// Returns [`PushError`] when the request cannot be sent or the backend
    /// rejects it. Callers treat failures as a skipped update.
    async fn trigger(&self, event: &str, payload: &serde_json::Value) -> PushResult<()>;

    /// Checks whether the notifier considers itself operational.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
