//! Push channel publishing.
//!
//! Provides a [`PushNotifier`] trait with two implementations:
//! - [`PusherClient`] - Production Pusher Channels HTTP API client
//! - [`LogNotifier`] - Logging fallback when trigger credentials are absent

mod log_notifier;
mod notifier;
mod pusher;

pub use log_notifier::LogNotifier;
pub use notifier::{MILESTONE_EVENT, PushError, PushNotifier, PushResult, TOTAL_UPDATED_EVENT};
pub use pusher::PusherClient;

#[cfg(test)]
pub use notifier::MockPushNotifier;
