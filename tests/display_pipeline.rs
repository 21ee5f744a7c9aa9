//! End-to-end tests for the display update pipeline: value feed in,
//! rendered value out. Uses a paused clock to pin down the deferred
//! initial animation.

use orderboard::display::{Odometer, SharedValue};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

fn start_pipeline(
    initial: Option<u64>,
) -> (watch::Sender<Option<u64>>, SharedValue, JoinHandle<()>) {
    let (tx, rx) = watch::channel(initial);
    let display = SharedValue::new();

    let mut odometer = Odometer::new(Duration::from_millis(2000));
    odometer.connect(Some(display.clone())).unwrap();

    let handle = tokio::spawn(odometer.run(rx));
    (tx, display, handle)
}

#[tokio::test(start_paused = true)]
async fn test_initial_value_applied_after_settle_delay() {
    let (_tx, display, _handle) = start_pipeline(Some(42));

    // Nothing renders before the 300ms settle delay
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(display.get(), 0);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(display.get(), 42);
}

#[tokio::test(start_paused = true)]
async fn test_no_initial_value_keeps_display_at_zero() {
    let (_tx, display, _handle) = start_pipeline(None);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(display.get(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_updates_racing_the_settle_delay_last_write_wins() {
    let (tx, display, _handle) = start_pipeline(Some(10));

    // A push arriving before the deferred timer fires supersedes the
    // rendered initial value
    tx.send(Some(25)).unwrap();

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(display.get(), 25);
}

#[tokio::test(start_paused = true)]
async fn test_push_updates_flow_through() {
    let (tx, display, _handle) = start_pipeline(Some(1));

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(display.get(), 1);

    tx.send(Some(2)).unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(display.get(), 2);

    tx.send(Some(3)).unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(display.get(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_null_updates_leave_display_unchanged() {
    let (tx, display, _handle) = start_pipeline(Some(7));

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(display.get(), 7);

    tx.send(None).unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(display.get(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_pipeline_stops_when_feed_closes() {
    let (tx, display, handle) = start_pipeline(Some(5));

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(display.get(), 5);

    drop(tx);
    handle.await.unwrap();

    assert_eq!(display.get(), 5);
}
