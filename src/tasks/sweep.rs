//! TTL Sweep Task
//!
//! Background tasks that periodically remove expired cache entries, owned by
//! a handle that can stop them.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::TtlCache;

/// Shortest interval a sweep will run at; a zero interval would spin.
const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

// == Sweep Handle ==
/// Owns a group of sweep tasks and their shutdown signal.
///
/// Every task spawned through the handle runs until [`SweepHandle::stop`] is
/// awaited or the handle is dropped; either closes the shared shutdown
/// channel and the tasks exit at their next wake-up.
#[derive(Debug)]
pub struct SweepHandle {
    interval: Duration,
    shutdown: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl SweepHandle {
    /// Creates a handle with no running tasks.
    pub fn new(interval: Duration) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            interval: interval.max(MIN_SWEEP_INTERVAL),
            shutdown,
            tasks: Vec::new(),
        }
    }

    /// Interval between sweeps.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of sweep tasks owned by this handle.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Spawns a task sweeping `cache` every interval.
    ///
    /// `name` only labels log lines. Must be called from within a Tokio
    /// runtime.
    pub fn spawn<T>(&mut self, name: &'static str, cache: Arc<TtlCache<T>>)
    where
        T: Send + Sync + 'static,
    {
        let mut shutdown = self.shutdown.subscribe();
        let interval = self.interval;

        let task = tokio::spawn(async move {
            info!(cache = name, ?interval, "Starting TTL sweep task");

            loop {
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {
                        let removed = cache.purge_expired();
                        if removed > 0 {
                            info!(cache = name, removed, "TTL sweep: removed expired entries");
                        } else {
                            debug!(cache = name, "TTL sweep: no expired entries found");
                        }
                    }
                    _ = shutdown.changed() => {
                        debug!(cache = name, "TTL sweep task stopping");
                        break;
                    }
                }
            }
        });

        self.tasks.push(task);
    }

    /// Signals every task to stop and waits for all of them to exit.
    pub async fn stop(self) {
        // Send only fails when every task has already gone
        let _ = self.shutdown.send(true);

        for task in self.tasks {
            if let Err(err) = task.await {
                warn!("TTL sweep task ended abnormally: {}", err);
            }
        }
    }
}

/// Spawns a single sweep task for `cache`.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(TtlCache::<String>::new(Duration::from_secs(300)));
/// let sweeper = spawn_sweep_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweeper.stop().await;
/// ```
pub fn spawn_sweep_task<T>(cache: Arc<TtlCache<T>>, interval: Duration) -> SweepHandle
where
    T: Send + Sync + 'static,
{
    let mut handle = SweepHandle::new(interval);
    handle.spawn("ttl_cache", cache);
    handle
}
