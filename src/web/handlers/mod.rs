//! HTML template rendering handlers.

mod index;
mod total_daily_orders;

pub use index::index_handler;
pub use total_daily_orders::{legacy_total_daily_orders_handler, total_daily_orders_handler};
