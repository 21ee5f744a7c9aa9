//! Log-only push notifier for disabled triggering.

use super::notifier::{PushNotifier, PushResult};
use async_trait::async_trait;
use tracing::debug;

/// A notifier that logs events instead of sending them.
///
/// Used when server-side trigger credentials are not configured. Every
/// publish succeeds immediately so the worker pipeline behaves identically.
///
/// # Use Cases
///
/// - Development environments without a Pusher application
/// - Testing scenarios where real delivery should be bypassed
pub struct LogNotifier;

impl LogNotifier {
    /// Creates a new LogNotifier instance.
    pub fn new() -> Self {
        debug!("Using LogNotifier (push triggering disabled)");
        Self
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PushNotifier for LogNotifier {
    async fn trigger(&self, event: &str, payload: &serde_json::Value) -> PushResult<()> {
        tracing::info!(event, %payload, "push event (not sent, triggering disabled)");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
