//! HTTP request handlers for the REST API.

mod display;
mod health;
mod orders;

pub use display::display_handler;
pub use health::health_handler;
pub use orders::record_order_handler;
