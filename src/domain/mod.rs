//! Core domain types for order ingestion and the daily counter.

pub mod daily_counter;
pub mod order_event;
pub mod push_worker;
