//! Periodic rankings fetch.
//!
//! [`Poller`] fetches once immediately and then once per interval, sending
//! every outcome to the main loop as a [`Message`]. Each tick's fetch runs in
//! its own task, so a slow response never holds back the next tick and
//! completions arrive in the order they finish.
//!
//! [`PollerHandle::stop`] cancels the timer and closes a liveness gate that
//! every fetch passes through before sending, so nothing is delivered after
//! `stop` returns even when a request was still in flight.

pub mod http;
pub mod simulated;

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::Result;
use crate::models::RankingsSnapshot;
use crate::tui::Message;

pub use http::HttpSource;
pub use simulated::SimulatedSource;

/// Poll period used when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Something that can produce a rankings snapshot on demand.
pub trait RankingSource: Send + Sync + 'static {
    /// Fetches the current snapshot.
    fn fetch(&self) -> impl Future<Output = Result<RankingsSnapshot>> + Send;
}

/// Starts repeating fetch schedules.
pub struct Poller;

impl Poller {
    /// Starts polling `source` every `interval`, beginning immediately.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start<S: RankingSource>(
        source: S,
        interval: Duration,
        tx: mpsc::UnboundedSender<Message>,
    ) -> PollerHandle {
        let source = Arc::new(source);
        let alive = Arc::new(Mutex::new(true));
        let gate = Arc::clone(&alive);

        info!("Starting rankings poller every {}ms", interval.as_millis());

        let timer = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut tick: u64 = 0;

            loop {
                ticker.tick().await;
                if tx.is_closed() {
                    debug!("Message channel closed, poller timer exiting");
                    break;
                }

                tick += 1;
                let source = Arc::clone(&source);
                let gate = Arc::clone(&gate);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = source.fetch().await;
                    deliver(&gate, &tx, tick, result);
                });
            }
        });

        PollerHandle {
            timer: Some(timer),
            alive,
        }
    }
}

/// Forwards one fetch outcome to the main loop unless the poller was stopped.
fn deliver(
    gate: &Mutex<bool>,
    tx: &mpsc::UnboundedSender<Message>,
    tick: u64,
    result: Result<RankingsSnapshot>,
) {
    // Held across the send so `stop` cannot interleave between check and send.
    let alive = gate.lock().unwrap_or_else(PoisonError::into_inner);
    if !*alive {
        debug!("Dropping tick {tick} result, poller stopped");
        return;
    }

    let message = match result {
        Ok(snapshot) => {
            debug!(
                "Tick {tick}: {} gainers, {} losers",
                snapshot.top.len(),
                snapshot.bottom.len()
            );
            Message::Rankings(snapshot)
        }
        Err(e) => {
            warn!("Tick {tick}: rankings fetch failed: {e}");
            Message::RankingsFailed(e.to_string())
        }
    };

    let _ = tx.send(message);
}

/// Owned handle to a running poller. Dropping it stops the poller.
pub struct PollerHandle {
    timer: Option<JoinHandle<()>>,
    alive: Arc<Mutex<bool>>,
}

impl PollerHandle {
    /// Stops the poller.
    ///
    /// Cancels the timer and guarantees that no further messages are sent.
    /// Requests already in flight are left to finish; their results are
    /// discarded. Calling `stop` more than once is a no-op.
    pub fn stop(&mut self) {
        *self.alive.lock().unwrap_or_else(PoisonError::into_inner) = false;
        if let Some(timer) = self.timer.take() {
            timer.abort();
            info!("Stopped rankings poller");
        }
    }

    /// Returns `true` until [`stop`](Self::stop) is called.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
