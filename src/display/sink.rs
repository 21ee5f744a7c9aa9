//! Display sink trait and the shared-value mirror implementation.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Render target for odometer animations.
///
/// In the browser the sink is a DOM element rolling its digits; server-side
/// implementations record the value instead. Implementations decide how (and
/// whether) to represent the animation interval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DisplaySink: Send + Sync {
    /// Renders a transition from `from` to `to` over `duration`.
    async fn animate(&mut self, from: u64, to: u64, duration: Duration);
}

/// Atomic mirror of the currently displayed value.
///
/// Cloned into the application state so handlers can read what connected
/// clients are showing. Animations land instantly: interpolating frames is
/// the client's job, the server only tracks the settled value.
#[derive(Clone, Default)]
pub struct SharedValue(Arc<AtomicU64>);

impl SharedValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last rendered value.
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DisplaySink for SharedValue {
    async fn animate(&mut self, _from: u64, to: u64, _duration: Duration) {
        self.0.store(to, Ordering::Relaxed);
    }
}
