//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with age tracking.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value with the instant it was stored.
///
/// The payload is opaque to the cache: it is stored on `set` and cloned
/// back out on `get`, never inspected or mutated in between.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic timestamp taken when the entry was written
    pub stored_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is expired once its age is greater than
    /// or equal to the TTL. With a zero TTL every entry is expired the
    /// moment it is stored, so nothing is ever servable from cache.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() >= ttl
    }

    // == Age ==
    /// Returns how long ago the entry was stored.
    pub fn age(&self) -> Duration {
        self.stored_at.elapsed()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_fresh_not_expired() {
        let entry = CacheEntry::new("value".to_string());

        assert_eq!(entry.value, "value");
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("value".to_string());

        assert!(!entry.is_expired(Duration::from_millis(50)));

        // Wait for expiration
        sleep(Duration::from_millis(80));

        assert!(entry.is_expired(Duration::from_millis(50)));
    }

    #[test]
    fn test_entry_zero_ttl_expires_immediately() {
        let entry = CacheEntry::new("value".to_string());

        // age >= 0 always holds, so a zero TTL is never servable
        assert!(entry.is_expired(Duration::ZERO));
    }

    #[test]
    fn test_entry_age_grows() {
        let entry = CacheEntry::new(42u32);

        let first = entry.age();
        sleep(Duration::from_millis(20));
        let second = entry.age();

        assert!(second > first);
    }
}
