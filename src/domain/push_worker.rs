//! Background worker turning order events into display and push updates.

use crate::display::{Confetti, ConfettiConfig, EffectSink};
use crate::domain::daily_counter::DailyCounter;
use crate::domain::order_event::OrderEvent;
use crate::infrastructure::push::{MILESTONE_EVENT, PushNotifier, TOTAL_UPDATED_EVENT};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

/// Worker tuning knobs, derived from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct PushWorkerConfig {
    /// Minimum gap between successive total-update publishes.
    pub threshold: Duration,
    /// Daily count step at which a celebration fires.
    pub milestone_step: u64,
}

/// Publishes a milestone celebration to connected clients.
///
/// The [`Confetti`] trigger guarantees the burst fires exactly once per
/// crossing; this sink carries it over the push channel.
struct CelebrationEffect {
    notifier: Arc<dyn PushNotifier>,
    milestone: u64,
}

#[async_trait]
impl EffectSink for CelebrationEffect {
    async fn launch(&mut self, config: &ConfettiConfig) {
        let payload = json!({
            "milestone": self.milestone,
            "symbols": config.symbols,
            "number": config.number,
        });
        if let Err(e) = self.notifier.trigger(MILESTONE_EVENT, &payload).await {
            tracing::warn!("Failed to publish milestone celebration: {e}");
        }
    }
}

/// Consumes order events until the channel closes.
///
/// Per event:
/// 1. Increments the daily counter (resetting on day change).
/// 2. Feeds the new count into the display pipeline. This always happens,
///    the `watch` channel keeps only the newest value.
/// 3. Publishes `total-updated` on the push channel, unless the previous
///    publish happened within the threshold window.
/// 4. On crossing a milestone, fires a one-shot celebration. Milestones are
///    rare and bypass the threshold window.
///
/// Publish failures are logged and treated as a skipped update; the worker
/// never stops on them.
pub async fn run_push_worker(
    mut rx: mpsc::Receiver<OrderEvent>,
    counter: Arc<DailyCounter>,
    display_tx: watch::Sender<Option<u64>>,
    notifier: Arc<dyn PushNotifier>,
    config: PushWorkerConfig,
) {
    let mut last_publish: Option<Instant> = None;
    let mut last_milestone: u64 = 0;
    let mut current_day: Option<NaiveDate> = None;

    while let Some(event) = rx.recv().await {
        let day = event.date_order.date_naive();
        if current_day.is_some_and(|d| day > d) {
            last_milestone = 0;
        }
        current_day = Some(current_day.map_or(day, |d| d.max(day)));

        let count = counter.record(day);
        let _ = display_tx.send(Some(count));

        let within_window = last_publish.is_some_and(|at| at.elapsed() < config.threshold);
        if within_window {
            tracing::debug!(count, "Skipping publish, within threshold window");
        } else {
            match notifier
                .trigger(TOTAL_UPDATED_EVENT, &json!({ "total": count }))
                .await
            {
                Ok(()) => last_publish = Some(Instant::now()),
                Err(e) => tracing::warn!("Failed to publish total update: {e}"),
            }
        }

        let milestone = count / config.milestone_step;
        if milestone > last_milestone {
            last_milestone = milestone;
            let mut confetti = Confetti::new();
            confetti
                .connect(CelebrationEffect {
                    notifier: notifier.clone(),
                    milestone: milestone * config.milestone_step,
                })
                .await;
        }
    }

    tracing::info!("Order channel closed, push worker stopping");
}
