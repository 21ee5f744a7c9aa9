//! One-shot confetti celebration trigger.

use async_trait::async_trait;

/// Default symbol set thrown by the effect.
pub const CONFETTI_SYMBOLS: [&str; 4] = ["🎉", "✨", "🎊", "💫"];

/// Default number of confetti particles per burst.
pub const CONFETTI_NUMBER: u32 = 50;

/// Fixed configuration for a confetti burst.
#[derive(Debug, Clone)]
pub struct ConfettiConfig {
    pub symbols: &'static [&'static str],
    pub number: u32,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            symbols: &CONFETTI_SYMBOLS,
            number: CONFETTI_NUMBER,
        }
    }
}

/// Receiver of a confetti burst.
///
/// Browser-side this is the particle effect itself; server-side it publishes
/// a celebration event to connected clients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EffectSink: Send + Sync {
    /// Fires the burst. Fire-and-forget: implementations swallow and log
    /// their own failures.
    async fn launch(&mut self, config: &ConfettiConfig);
}

/// A decorative effect that fires exactly once when connected.
///
/// Not retriggerable: a second burst requires a fresh instance. No error
/// handling, no state beyond the bound effect.
pub struct Confetti<E: EffectSink> {
    effect: Option<E>,
    config: ConfettiConfig,
}

impl<E: EffectSink> Confetti<E> {
    pub fn new() -> Self {
        Self::with_config(ConfettiConfig::default())
    }

    pub fn with_config(config: ConfettiConfig) -> Self {
        Self {
            effect: None,
            config,
        }
    }

    /// Binds the effect and immediately fires the burst.
    pub async fn connect(&mut self, effect: E) {
        self.effect = Some(effect);
        self.launch().await;
    }

    async fn launch(&mut self) {
        if let Some(effect) = self.effect.as_mut() {
            effect.launch(&self.config).await;
        }
    }
}

impl<E: EffectSink> Default for Confetti<E> {
    fn default() -> Self {
        Self::new()
    }
}
