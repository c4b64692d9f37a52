//! Response Cache Store Module
//!
//! Bounded, time-expiring memoization store for analysis results:
//! HashMap storage combined with FIFO insertion-order tracking and lazy
//! TTL expiry on read. There is no background sweep; an expired entry is
//! removed by the next lookup that would have observed it, so worst-case
//! memory includes expired-but-unread entries up to `capacity`.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, FifoTracker};
use crate::error::{AppError, Result};

// == Response Cache ==
/// Bounded memoization store with TTL expiry and FIFO eviction.
///
/// The payload type is opaque: values go in on `set`, come back out on
/// `get`, and are never inspected. The cache never performs the expensive
/// computation itself; callers run the miss -> compute -> `set` sequence
/// and must not `set` on a failed computation.
#[derive(Debug)]
pub struct ResponseCache<V> {
    /// Fingerprint-to-entry storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion-order tracker for eviction
    fifo: FifoTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of live entries
    capacity: usize,
    /// Maximum age an entry may reach before being treated as absent
    ttl: Duration,
}

impl<V: Clone> ResponseCache<V> {
    // == Constructor ==
    /// Creates a new ResponseCache with the given capacity and TTL.
    ///
    /// A capacity of zero is invalid configuration and fails immediately.
    /// A TTL of zero is valid: every entry expires the moment it is
    /// stored, so every read is a miss.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        if capacity == 0 {
            return Err(AppError::InvalidConfig(
                "cache capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            entries: HashMap::new(),
            fifo: FifoTracker::new(),
            stats: CacheStats::new(),
            capacity,
            ttl,
        })
    }

    // == Get ==
    /// Looks up a fingerprint.
    ///
    /// Absent keys return None. An entry whose age has reached the TTL is
    /// removed on the spot (lazy expiry) and also returns None. A live
    /// entry is cloned back out; reads never refresh `stored_at` and never
    /// change the eviction order.
    pub fn get(&mut self, key: &str) -> Option<V> {
        // Check expiry with an immutable borrow first to avoid overlapping borrows.
        let expired = self.entries.get(key).map(|e| e.is_expired(self.ttl));
        match expired {
            None => {
                self.stats.record_miss();
                None
            }
            Some(true) => {
                debug!(key = %&key[..8.min(key.len())], "cache entry expired, removing");
                self.entries.remove(key);
                self.fifo.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            Some(false) => {
                self.stats.record_hit();
                self.entries.get(key).map(|e| e.value.clone())
            }
        }
    }

    // == Set ==
    /// Inserts or overwrites the entry for `key` with a fresh timestamp.
    ///
    /// A brand new key joins the most-recent end of the insertion order.
    /// Overwriting an existing key replaces the value and resets its
    /// `stored_at` but keeps the key's original insertion-order position,
    /// and cannot trigger eviction since the table does not grow.
    ///
    /// After inserting a new key, if the table exceeds capacity, exactly
    /// one entry is evicted: the structurally oldest. `set` is the only
    /// way the table grows, so one eviction per call keeps the bound.
    pub fn set(&mut self, key: String, value: V) {
        let is_overwrite = self.entries.contains_key(&key);
        if !is_overwrite {
            self.fifo.push(&key);
        }
        self.entries.insert(key, CacheEntry::new(value));

        if self.entries.len() > self.capacity {
            if let Some(evicted) = self.fifo.pop_oldest() {
                debug!(
                    key = %&evicted[..8.min(evicted.len())],
                    "capacity exceeded, evicting oldest entry"
                );
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes every entry from the cache.
    ///
    /// Returns the number of entries dropped. Counters other than the
    /// live-entry count are preserved.
    pub fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        self.fifo.clear();
        self.stats.set_total_entries(0);
        dropped
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
