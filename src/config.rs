//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `PUSHER_APP_KEY` - Public Pusher Channels application key (embedded in pages)
//! - `PUSHER_CLUSTER` - Pusher cluster identifier (e.g. `eu`, `us2`)
//! - `PUSHER_CHANNEL` - Channel name pages subscribe to
//!
//! ## Optional Variables
//!
//! - `PUSHER_APP_ID` / `PUSHER_SECRET` - Server-side trigger credentials; when
//!   both are set, the server publishes real events through the Pusher HTTP API.
//!   Otherwise events are logged instead of sent.
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PUSH_THRESHOLD_MINUTES` - Minimum gap between total-update publishes (default: 5)
//! - `ORDER_QUEUE_CAPACITY` - Order event buffer size (default: 10000, min: 100)
//! - `ODOMETER_DURATION_MS` - Counter roll-up animation length (default: 2000)
//! - `MILESTONE_STEP` - Daily order count step that triggers a celebration (default: 100)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Public identifiers a page needs to open its push subscription.
///
/// Sourced from configuration and embedded unchanged into every rendered page
/// that uses the push channel. Immutable for the page's lifetime.
#[derive(Debug, Clone)]
pub struct ChannelCredentials {
    pub app_key: String,
    pub cluster: String,
    pub channel: String,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    /// Public Pusher key embedded into rendered pages.
    pub pusher_app_key: String,
    /// Pusher cluster identifier embedded into rendered pages.
    pub pusher_cluster: String,
    /// Channel name pages subscribe to.
    pub pusher_channel: String,
    /// Application id for server-side event triggering (optional).
    pub pusher_app_id: Option<String>,
    /// Secret for signing server-side trigger requests (optional, never logged).
    pub pusher_secret: Option<String>,

    /// Minimum gap between successive total-update publishes.
    /// Milestone celebrations bypass this window.
    pub push_threshold_minutes: u64,
    /// Capacity of the order event channel feeding the background worker.
    pub order_queue_capacity: usize,
    /// Roll-up animation length passed to the counter display.
    /// A value of 0 falls back to the 2000ms default.
    pub odometer_duration_ms: u64,
    /// Daily order count step at which a celebration event fires.
    pub milestone_step: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required Pusher page credentials are missing.
    pub fn from_env() -> Result<Self> {
        let pusher_app_key =
            env::var("PUSHER_APP_KEY").context("PUSHER_APP_KEY must be set")?;
        let pusher_cluster =
            env::var("PUSHER_CLUSTER").context("PUSHER_CLUSTER must be set")?;
        let pusher_channel =
            env::var("PUSHER_CHANNEL").context("PUSHER_CHANNEL must be set")?;

        let pusher_app_id = env::var("PUSHER_APP_ID").ok().filter(|v| !v.is_empty());
        let pusher_secret = env::var("PUSHER_SECRET").ok().filter(|v| !v.is_empty());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let push_threshold_minutes = env::var("PUSH_THRESHOLD_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let order_queue_capacity = env::var("ORDER_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let odometer_duration_ms = env::var("ODOMETER_DURATION_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(2000);

        let milestone_step = env::var("MILESTONE_STEP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            pusher_app_key,
            pusher_cluster,
            pusher_channel,
            pusher_app_id,
            pusher_secret,
            push_threshold_minutes,
            order_queue_capacity,
            odometer_duration_ms,
            milestone_step,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - any page credential is empty
    /// - `order_queue_capacity` is out of range
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `milestone_step` is 0
    pub fn validate(&self) -> Result<()> {
        if self.pusher_app_key.is_empty() {
            anyhow::bail!("PUSHER_APP_KEY must not be empty");
        }
        if self.pusher_cluster.is_empty() {
            anyhow::bail!("PUSHER_CLUSTER must not be empty");
        }
        if self.pusher_channel.is_empty() {
            anyhow::bail!("PUSHER_CHANNEL must not be empty");
        }

        // Triggering requires both halves of the server credential pair
        if self.pusher_app_id.is_some() != self.pusher_secret.is_some() {
            anyhow::bail!(
                "PUSHER_APP_ID and PUSHER_SECRET must be set together (or both omitted)"
            );
        }

        if self.order_queue_capacity < 100 {
            anyhow::bail!(
                "ORDER_QUEUE_CAPACITY must be at least 100, got {}",
                self.order_queue_capacity
            );
        }

        if self.order_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "ORDER_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.order_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.milestone_step == 0 {
            anyhow::bail!("MILESTONE_STEP must be at least 1");
        }

        if self.odometer_duration_ms == 0 {
            anyhow::bail!("ODOMETER_DURATION_MS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether server-side event triggering is configured.
    pub fn can_trigger_events(&self) -> bool {
        self.pusher_app_id.is_some() && self.pusher_secret.is_some()
    }

    /// Credentials embedded into rendered pages.
    pub fn channel_credentials(&self) -> ChannelCredentials {
        ChannelCredentials {
            app_key: self.pusher_app_key.clone(),
            cluster: self.pusher_cluster.clone(),
            channel: self.pusher_channel.clone(),
        }
    }

    /// Publish rate-limit window as a [`Duration`].
    pub fn push_threshold(&self) -> Duration {
        Duration::from_secs(self.push_threshold_minutes * 60)
    }

    /// Odometer animation length as a [`Duration`].
    pub fn odometer_duration(&self) -> Duration {
        Duration::from_millis(self.odometer_duration_ms)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Pusher cluster: {}", self.pusher_cluster);
        tracing::info!("  Pusher channel: {}", self.pusher_channel);

        if self.can_trigger_events() {
            tracing::info!("  Event triggering: enabled (Pusher HTTP API)");
        } else {
            tracing::info!("  Event triggering: disabled (log only)");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Push threshold: {} min", self.push_threshold_minutes);
        tracing::info!("  Order queue capacity: {}", self.order_queue_capacity);
        tracing::info!("  Milestone step: {}", self.milestone_step);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
