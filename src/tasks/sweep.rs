//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

use crate::cache::ExpiringCache;

/// Handle to a running sweep task.
///
/// Dropping the handle also stops the task, but without waiting for it;
/// call [`SweepHandle::shutdown`] to stop it and wait.
#[derive(Debug)]
pub struct SweepHandle {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl SweepHandle {
    /// Signals the task to stop and waits for it to exit.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        // The receiver only disappears once the task has already exited
        let _ = self.shutdown_tx.send(true);
        self.handle.await
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns a background task that sweeps expired entries out of `cache`.
///
/// The first sweep runs one full `interval` after spawning. Each pass locks
/// one shard of the cache at a time, so request traffic keeps flowing while
/// a sweep is in progress.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(ExpiringCache::new(DEFAULT_SLIDING_WINDOW));
/// let sweeper = spawn_sweep_task(cache.clone(), Duration::from_secs(5));
/// // Later, during shutdown:
/// sweeper.shutdown().await?;
/// ```
pub fn spawn_sweep_task<V>(cache: Arc<ExpiringCache<V>>, interval: Duration) -> SweepHandle
where
    V: Clone + Send + Sync + 'static,
{
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let handle = tokio::spawn(async move {
        info!("Starting expiry sweep task with interval of {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = cache.sweep();
                    if removed > 0 {
                        info!("Expiry sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Expiry sweep: no expired entries found");
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Expiry sweep task stopped");
    });

    SweepHandle {
        shutdown_tx,
        handle,
    }
}
