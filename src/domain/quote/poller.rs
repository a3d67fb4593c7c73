//! Background quote refresh — a tokio task owned by a [`QuotePoller`] handle.
//!
//! The task fetches once immediately and then on every interval tick. Each
//! result replaces the shared [`QuoteState`] and is pushed to the update
//! channel. Dropping the handle aborts the task.

use std::sync::Arc;
use std::time::Duration;

use async_lock::RwLock;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{QuoteState, DEFAULT_POINT_COUNT};
use crate::client::TrackerClient;
use crate::http::JsonTransport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    /// Time between refreshes.
    pub interval: Duration,
    /// Points per generated series.
    pub point_count: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            point_count: DEFAULT_POINT_COUNT,
        }
    }
}

/// Handle to a running quote refresh task.
pub struct QuotePoller {
    state: Arc<RwLock<QuoteState>>,
    update_rx: mpsc::Receiver<QuoteState>,
    task_handle: Option<JoinHandle<()>>,
}

impl QuotePoller {
    /// Start polling. Must be called inside a tokio runtime.
    pub fn spawn<H>(client: TrackerClient<H>, config: PollerConfig) -> Self
    where
        H: JsonTransport + 'static,
    {
        let state = Arc::new(RwLock::new(QuoteState::Loading));
        let (update_tx, update_rx) = mpsc::channel(16);

        tracing::info!(interval_secs = config.interval.as_secs(), "Quote poller started");
        let handle = tokio::spawn(run_task(client, config, Arc::clone(&state), update_tx));

        Self {
            state,
            update_rx,
            task_handle: Some(handle),
        }
    }

    /// Snapshot of the current widget state.
    pub async fn latest(&self) -> QuoteState {
        self.state.read().await.clone()
    }

    /// The shared state the task writes into.
    pub fn shared_state(&self) -> Arc<RwLock<QuoteState>> {
        Arc::clone(&self.state)
    }

    /// Wait for the next refresh. `None` once the task has stopped.
    ///
    /// Updates are dropped when nobody drains them; [`latest`](Self::latest)
    /// always has the newest state.
    pub async fn next_update(&mut self) -> Option<QuoteState> {
        self.update_rx.recv().await
    }

    pub fn is_running(&self) -> bool {
        self.task_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the task and wait for it to wind down.
    pub async fn stop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
            let _ = handle.await;
            tracing::info!("Quote poller stopped");
        }
    }
}

impl Drop for QuotePoller {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

async fn run_task<H: JsonTransport>(
    client: TrackerClient<H>,
    config: PollerConfig,
    state: Arc<RwLock<QuoteState>>,
    update_tx: mpsc::Sender<QuoteState>,
) {
    let mut ticker = tokio::time::interval(config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let next = client.quotes().refresh(config.point_count).await;
        if let Some(message) = next.error() {
            tracing::warn!(error = message, "Quote refresh failed");
        }

        *state.write().await = next.clone();

        if let Err(mpsc::error::TrySendError::Closed(_)) = update_tx.try_send(next) {
            break;
        }
    }
}
