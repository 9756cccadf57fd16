//! Periodic whole-cache invalidation.
//!
//! One [`CacheSweeper`] runs per cache; the cache itself holds the claim, so
//! separate sweeper instances over one cache cannot both run. Each cycle it
//! sleeps for the configured interval and then clears the entire result
//! cache; host counters are left untouched. Shutdown is cooperative: the
//! loop observes a watch flag between cycles and while sleeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{oneshot, watch};
use tracing::{error, info};

use super::{ResultCache, Spawn, TaskError};

/// Phase of the sweeper loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweeperState {
    /// Constructed, not started.
    Idle,
    /// Waiting for the next sweep.
    Sleeping,
    /// Clearing the cache.
    Sweeping,
    /// Loop exited after shutdown.
    Stopped,
}

struct SweeperShared {
    state: Mutex<SweeperState>,
    cycles: AtomicU64,
}

impl SweeperShared {
    fn set_state(&self, state: SweeperState) {
        *self.state.lock() = state;
    }
}

/// Background loop that clears a [`ResultCache`] on a fixed interval.
pub struct CacheSweeper<C> {
    cache: Arc<C>,
    interval: Duration,
    shared: Arc<SweeperShared>,
}

impl<C: ResultCache> CacheSweeper<C> {
    /// Create a sweeper for `cache` that clears it every `interval`.
    pub fn new(cache: Arc<C>, interval: Duration) -> Self {
        Self {
            cache,
            interval,
            shared: Arc::new(SweeperShared {
                state: Mutex::new(SweeperState::Idle),
                cycles: AtomicU64::new(0),
            }),
        }
    }

    /// Configured interval between sweeps.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Current loop phase.
    pub fn state(&self) -> SweeperState {
        *self.shared.state.lock()
    }

    /// Number of completed sweeps.
    pub fn cycles(&self) -> u64 {
        self.shared.cycles.load(Ordering::Acquire)
    }

    /// Spawn the sweep loop. Fails while any sweeper over the same cache is
    /// still running.
    pub fn start<S: Spawn>(&self, spawner: &S) -> Result<SweeperHandle, TaskError> {
        if !self.cache.try_claim_sweeper() {
            return Err(TaskError::SweeperAlreadyRunning);
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (done_tx, done_rx) = oneshot::channel();
        let cache = Arc::clone(&self.cache);
        let shared = Arc::clone(&self.shared);
        let interval = self.interval;

        info!(interval_secs = interval.as_secs_f64(), "starting cache sweeper");
        spawner.spawn(async move {
            sweep_loop(cache.as_ref(), interval, &shared, shutdown_rx).await;
            cache.release_sweeper();
            shared.set_state(SweeperState::Stopped);
            let _ = done_tx.send(());
        });

        Ok(SweeperHandle {
            shutdown: shutdown_tx,
            done: done_rx,
            shared: Arc::clone(&self.shared),
        })
    }
}

async fn sweep_loop<C: ResultCache>(
    cache: &C,
    interval: Duration,
    shared: &SweeperShared,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        let stop = *shutdown.borrow();
        if stop {
            break;
        }

        shared.set_state(SweeperState::Sleeping);
        tokio::select! {
            () = tokio::time::sleep(interval) => {}
            changed = shutdown.changed() => {
                // Sender dropped counts as shutdown too.
                let stop = changed.is_err() || *shutdown.borrow();
                if stop {
                    break;
                }
                continue;
            }
        }

        shared.set_state(SweeperState::Sweeping);
        match cache.clear_all() {
            Ok(evicted) => info!(evicted, "cache swept"),
            Err(e) => error!(error = %e, "cache sweep failed"),
        }
        shared.cycles.fetch_add(1, Ordering::AcqRel);
    }
    info!("cache sweeper shutting down");
}

/// Handle to a running sweeper.
///
/// Dropping the handle also stops the loop at its next check.
pub struct SweeperHandle {
    shutdown: watch::Sender<bool>,
    done: oneshot::Receiver<()>,
    shared: Arc<SweeperShared>,
}

impl SweeperHandle {
    /// Number of completed sweeps.
    pub fn cycles(&self) -> u64 {
        self.shared.cycles.load(Ordering::Acquire)
    }

    /// Current loop phase.
    pub fn state(&self) -> SweeperState {
        *self.shared.state.lock()
    }

    /// Signal shutdown and wait for the loop to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.done.await;
    }
}
