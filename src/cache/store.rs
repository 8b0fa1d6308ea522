//! Cache Store Module
//!
//! Main cache engine: a sharded concurrent map of entries with absolute and
//! sliding expiration, lazy expiry on read, and an explicit sweep.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;

use crate::cache::eviction::notify;
use crate::cache::{
    CacheEntry, CacheStats, Clock, EntryMeta, EvictionListener, EvictionReason, StatsRecorder,
    SystemClock,
};

// == Cache Hit ==
/// Snapshot returned by a successful read.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheHit<V> {
    /// Copy of the stored value
    pub value: V,
    /// Entry metadata after the read refreshed the sliding deadline
    pub meta: EntryMeta,
    /// Time left before the effective deadline, measured at the read
    pub remaining_ttl: Duration,
}

// == Expiring Cache ==
/// Thread-safe key-value store with per-entry TTL and a sliding read window.
///
/// Operations on the same key are serialized by the key's shard lock;
/// operations on keys in different shards never contend. Expired entries are
/// never returned: reads check the effective deadline and remove stale
/// entries on the spot, and [`ExpiringCache::sweep`] clears the rest.
pub struct ExpiringCache<V> {
    /// Key-value storage
    entries: DashMap<String, CacheEntry<V>>,
    /// How far each hit pushes the sliding deadline
    sliding_window: Duration,
    clock: Arc<dyn Clock>,
    listener: Option<Arc<dyn EvictionListener>>,
    stats: StatsRecorder,
}

impl<V> ExpiringCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates an empty cache driven by the system clock.
    pub fn new(sliding_window: Duration) -> Self {
        Self::with_clock(sliding_window, Arc::new(SystemClock))
    }

    /// Creates an empty cache driven by `clock`.
    pub fn with_clock(sliding_window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            sliding_window,
            clock,
            listener: None,
            stats: StatsRecorder::new(),
        }
    }

    /// Subscribes `listener` to expiry-driven removals, replacing any previous one.
    pub fn with_listener(mut self, listener: Arc<dyn EvictionListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl`.
    ///
    /// Any existing entry is replaced wholesale, timestamps included. A
    /// replacement is not an eviction and is not reported to the listener.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) -> EntryMeta {
        let entry = CacheEntry::new(value, self.clock.now(), ttl, self.sliding_window);
        let meta = entry.meta;
        self.entries.insert(key.into(), entry);
        meta
    }

    // == Get ==
    /// Reads the live entry under `key`.
    ///
    /// A hit moves the sliding deadline forward in the same critical section as
    /// the read. An entry past its effective deadline is removed, reported to
    /// the listener, and treated as absent.
    pub fn get(&self, key: &str) -> Option<CacheHit<V>> {
        if let Some(mut entry) = self.entries.get_mut(key) {
            // Read the clock under the lock so concurrent hits apply in order
            let now = self.clock.now();
            if entry.meta.is_live(now) {
                entry.touch(now, self.sliding_window);
                let hit = CacheHit {
                    value: entry.value.clone(),
                    meta: entry.meta,
                    remaining_ttl: entry.meta.remaining_ttl(now),
                };
                self.stats.record_hit();
                return Some(hit);
            }
        }

        self.evict_if_expired(key);
        self.stats.record_miss();
        None
    }

    // == Delete ==
    /// Removes the entry under `key`, live or not.
    ///
    /// Returns whether the key occupied a slot, regardless of liveness.
    /// Never reported to the listener.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Sweep ==
    /// Removes every entry past its effective deadline.
    ///
    /// Locks one shard at a time and re-checks liveness under that lock, so
    /// a `set` racing with the sweep always survives it.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&self) -> usize {
        let mut evicted = Vec::new();

        self.entries.retain(|key, entry| {
            if entry.meta.is_live(self.clock.now()) {
                true
            } else {
                evicted.push((key.clone(), entry.meta.expiry_reason()));
                false
            }
        });

        for (key, reason) in &evicted {
            self.record_eviction(key, *reason);
        }
        evicted.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    /// Number of stored entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sliding_window(&self) -> Duration {
        self.sliding_window
    }

    fn evict_if_expired(&self, key: &str) {
        let removed = self
            .entries
            .remove_if(key, |_, entry| !entry.meta.is_live(self.clock.now()));

        if let Some((key, entry)) = removed {
            self.record_eviction(&key, entry.meta.expiry_reason());
        }
    }

    fn record_eviction(&self, key: &str, reason: EvictionReason) {
        self.stats.record_eviction();
        if let Some(listener) = &self.listener {
            notify(listener.as_ref(), key, reason);
        }
    }
}

impl<V> fmt::Debug for ExpiringCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("entries", &self.entries.len())
            .field("sliding_window", &self.sliding_window)
            .field("clock", &self.clock)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
