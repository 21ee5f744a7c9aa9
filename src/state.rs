//! Shared application state injected into all handlers.

use crate::config::ChannelCredentials;
use crate::display::SharedValue;
use crate::domain::daily_counter::DailyCounter;
use crate::domain::order_event::OrderEvent;
use crate::infrastructure::push::PushNotifier;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct AppState {
    /// Push credentials embedded into rendered pages.
    pub credentials: ChannelCredentials,
    /// Sender feeding the background push worker.
    pub order_tx: mpsc::Sender<OrderEvent>,
    /// Orders counted for the current day.
    pub counter: Arc<DailyCounter>,
    /// Mirror of the value the display pipeline last rendered.
    pub display: SharedValue,
    /// Push channel publisher (health checks only; publishing goes through the worker).
    pub notifier: Arc<dyn PushNotifier>,
    /// Animation length passed to the counter page.
    pub odometer_duration_ms: u64,
}
