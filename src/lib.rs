//! # Orderboard
//!
//! A real-time daily orders dashboard built with Axum and Pusher Channels.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Order events, the daily counter, and the
//!   background worker that turns orders into display and push updates
//! - **Display Layer** ([`display`]) - Server-side model of the dashboard
//!   counter: odometer animation state and the one-shot confetti trigger
//! - **Infrastructure Layer** ([`infrastructure`]) - Push channel publishing
//!   (Pusher Channels HTTP API, with a log-only fallback)
//! - **API Layer** ([`api`]) - REST endpoints for order intake, display
//!   snapshots, and health
//! - **Web Layer** ([`web`]) - Server-rendered pages with the animated counter
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export PUSHER_APP_KEY="app-key"
//! export PUSHER_CLUSTER="eu"
//! export PUSHER_CHANNEL="orders"
//!
//! # Optional: enable real event publishing
//! export PUSHER_APP_ID="100200"
//! export PUSHER_SECRET="app-secret"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod display;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AppError, InitError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::{ChannelCredentials, Config};
    pub use crate::display::{Odometer, SharedValue};
    pub use crate::domain::daily_counter::DailyCounter;
    pub use crate::domain::order_event::OrderEvent;
    pub use crate::error::{AppError, InitError};
    pub use crate::state::AppState;
}
