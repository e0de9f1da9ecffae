//! TTL Cache Store Module
//!
//! Generic key-value store with per-entry expiration, guarded by a single
//! reader/writer lock.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};
use crate::tasks::SweepHandle;

// == TTL Cache ==
/// Thread-safe map from string keys to values of one type, each entry
/// expiring a fixed TTL after it was last set.
///
/// `get` hides expired entries immediately; the physical entry lingers until
/// the next sweep (`purge_expired`) or until it is overwritten or deleted.
#[derive(Debug)]
pub struct TtlCache<T> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    /// TTL applied to every entry; zero means entries never expire
    ttl: Duration,
    /// Time source for stamping and checking expiry
    clock: Arc<dyn Clock>,
    /// Hit/miss counters
    stats: StatsRecorder,
}

impl<T> TtlCache<T> {
    // == Constructor ==
    /// Creates an empty cache using the system clock.
    ///
    /// No sweep runs; use [`TtlCache::start`] for a cache that reclaims
    /// expired entries in the background.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
            stats: StatsRecorder::default(),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its TTL.
    pub fn set(&self, key: impl Into<String>, value: T) {
        let entry = CacheEntry::new(value, self.clock.now_ms(), self.ttl);
        self.entries.write().insert(key.into(), entry);
    }

    // == Delete ==
    /// Removes the entry for `key`. Absent keys are ignored.
    pub fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        *entries = HashMap::new();
    }

    // == Delete By Prefix ==
    /// Removes every entry whose key starts with `prefix`.
    ///
    /// Returns the number of entries removed.
    pub fn delete_by_prefix(&self, prefix: &str) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        before - entries.len()
    }

    // == Purge Expired ==
    /// Removes all entries that have expired.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - entries.len();
        drop(entries);

        self.stats.record_expired(removed);
        removed
    }

    // == Length ==
    /// Returns the number of stored entries, including expired entries not
    /// yet purged.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// TTL applied to new entries.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }
}

impl<T: Clone> TtlCache<T> {
    // == Get ==
    /// Returns a clone of the live value for `key`.
    ///
    /// A missing key and an expired entry both yield `None`.
    pub fn get(&self, key: &str) -> Option<T> {
        let now = self.clock.now_ms();
        let entries = self.entries.read();

        match entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                debug!(key, "cache miss");
                None
            }
        }
    }
}

impl<T> TtlCache<T>
where
    T: Send + Sync + 'static,
{
    // == Start ==
    /// Creates a cache and spawns its background sweep.
    ///
    /// Must be called from within a Tokio runtime. The sweep runs every
    /// `sweep_interval` until the returned handle is stopped or dropped.
    pub fn start(ttl: Duration, sweep_interval: Duration) -> (Arc<Self>, SweepHandle) {
        let cache = Arc::new(Self::new(ttl));
        let mut sweeper = SweepHandle::new(sweep_interval);
        sweeper.spawn("ttl_cache", cache.clone());
        (cache, sweeper)
    }
}
