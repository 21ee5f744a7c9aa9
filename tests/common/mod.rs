#![allow(dead_code)]

use orderboard::config::ChannelCredentials;
use orderboard::display::SharedValue;
use orderboard::domain::daily_counter::DailyCounter;
use orderboard::domain::order_event::OrderEvent;
use orderboard::infrastructure::push::LogNotifier;
use orderboard::state::AppState;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn create_test_state() -> (AppState, mpsc::Receiver<OrderEvent>) {
    create_test_state_with_capacity(100)
}

pub fn create_test_state_with_capacity(
    capacity: usize,
) -> (AppState, mpsc::Receiver<OrderEvent>) {
    let (tx, rx) = mpsc::channel(capacity);

    let state = AppState {
        credentials: ChannelCredentials {
            app_key: "test-key".to_string(),
            cluster: "eu".to_string(),
            channel: "orders".to_string(),
        },
        order_tx: tx,
        counter: Arc::new(DailyCounter::new()),
        display: SharedValue::new(),
        notifier: Arc::new(LogNotifier::new()),
        odometer_duration_ms: 2000,
    };

    (state, rx)
}
