//! HTTP server initialization and runtime setup.
//!
//! Handles notifier selection, worker spawning, display pipeline setup, and
//! Axum server lifecycle.

use crate::config::Config;
use crate::display::{Odometer, SharedValue};
use crate::domain::daily_counter::DailyCounter;
use crate::domain::push_worker::{PushWorkerConfig, run_push_worker};
use crate::infrastructure::push::{LogNotifier, PushNotifier, PusherClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Push notifier (Pusher HTTP API, or log-only fallback)
/// - Background push worker
/// - Display pipeline (server-side odometer mirror)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let notifier: Arc<dyn PushNotifier> = match (&config.pusher_app_id, &config.pusher_secret) {
        (Some(app_id), Some(secret)) => {
            tracing::info!("Push triggering enabled (Pusher HTTP API)");
            Arc::new(PusherClient::new(
                app_id.clone(),
                config.pusher_app_key.clone(),
                secret.clone(),
                config.pusher_cluster.clone(),
                config.pusher_channel.clone(),
            ))
        }
        _ => {
            tracing::info!("Push triggering disabled, events will be logged");
            Arc::new(LogNotifier::new())
        }
    };

    let (order_tx, order_rx) = mpsc::channel(config.order_queue_capacity);
    let (value_tx, value_rx) = watch::channel(None);

    let counter = Arc::new(DailyCounter::new());
    let display = SharedValue::new();

    // Server-side mirror of the client counter. A failed bind is logged and
    // the dashboard keeps serving pages without it.
    let mut odometer = Odometer::new(config.odometer_duration());
    match odometer.connect(Some(display.clone())) {
        Ok(()) => {
            tokio::spawn(odometer.run(value_rx));
            tracing::info!("Display pipeline started");
        }
        Err(e) => tracing::error!("Failed to initialize display pipeline: {e}"),
    }

    tokio::spawn(run_push_worker(
        order_rx,
        counter.clone(),
        value_tx,
        notifier.clone(),
        PushWorkerConfig {
            threshold: config.push_threshold(),
            milestone_step: config.milestone_step,
        },
    ));
    tracing::info!("Push worker started");

    let state = AppState {
        credentials: config.channel_credentials(),
        order_tx,
        counter,
        display,
        notifier,
        odometer_duration_ms: config.odometer_duration_ms,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
