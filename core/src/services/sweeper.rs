//! Expiry sweeper for the in-memory stores
//!
//! Periodically purges expired one-time codes and elapsed rate-limit buckets
//! so that memory stays bounded by live entries.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::services::rate_limit::InMemoryRateLimiter;
use crate::services::verification::CodeStore;

/// Result of one sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Number of expired codes removed
    pub expired_codes: usize,
    /// Number of elapsed rate-limit buckets removed
    pub expired_buckets: usize,
}

impl SweepResult {
    /// Get total number of entries removed
    pub fn total(&self) -> usize {
        self.expired_codes + self.expired_buckets
    }
}

/// Background task purging expired entries at a fixed interval
pub struct ExpirySweeper {
    code_store: Arc<CodeStore>,
    rate_limiter: Option<Arc<InMemoryRateLimiter>>,
    interval: Duration,
}

impl ExpirySweeper {
    pub fn new(code_store: Arc<CodeStore>, interval: Duration) -> Self {
        Self {
            code_store,
            rate_limiter: None,
            interval,
        }
    }

    /// Also purge buckets of an in-process rate limiter
    pub fn with_rate_limiter(mut self, rate_limiter: Arc<InMemoryRateLimiter>) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    /// Run a single sweep
    pub fn run_once(&self) -> SweepResult {
        let result = SweepResult {
            expired_codes: self.code_store.purge_expired(),
            expired_buckets: self
                .rate_limiter
                .as_ref()
                .map(|limiter| limiter.purge_expired())
                .unwrap_or(0),
        };

        if result.total() > 0 {
            debug!(
                expired_codes = result.expired_codes,
                expired_buckets = result.expired_buckets,
                event = "expiry_sweep",
                "Purged expired entries"
            );
        }
        result
    }

    /// Start the sweeper as a background task
    ///
    /// The first sweep happens one interval after start. The returned handle
    /// stops the task.
    pub fn start(self: Arc<Self>) -> SweeperHandle {
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let join = tokio::spawn(async move {
            info!(
                interval_seconds = self.interval.as_secs(),
                "Expiry sweeper started"
            );

            let mut timer = tokio::time::interval(self.interval);
            // The first tick of a tokio interval completes immediately
            timer.tick().await;

            loop {
                tokio::select! {
                    _ = timer.tick() => {
                        self.run_once();
                    }
                    changed = stop_rx.changed() => {
                        if changed.is_err() {
                            warn!("Expiry sweeper handle dropped, stopping");
                        }
                        break;
                    }
                }
            }

            info!("Expiry sweeper stopped");
        });

        SweeperHandle { stop_tx, join }
    }
}

/// Handle to a running [`ExpirySweeper`]
pub struct SweeperHandle {
    stop_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signal the sweeper to stop and wait for it to finish
    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        if let Err(e) = self.join.await {
            warn!(error = %e, "Expiry sweeper task ended abnormally");
        }
    }
}
