//! Cache Store Module
//!
//! Bounded key-value store with LRU eviction, safe to share across threads.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::{lru, AccessClock, CacheEntry, CacheStats, StatsCounters};
use crate::error::StoreError;

// == LRU Store ==
/// Fixed-capacity cache with least-recently-used eviction.
///
/// Lookups share a read lock and may run in parallel; inserts take the write
/// lock, so no caller ever sees a half-inserted or half-evicted map.
#[derive(Debug)]
pub struct LruStore<V> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    /// Source of access stamps
    clock: AccessClock,
    /// Performance statistics
    stats: StatsCounters,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<V: Clone> LruStore<V> {
    // == Constructor ==
    /// Creates a new store holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, StoreError> {
        if capacity == 0 {
            return Err(StoreError::InvalidCapacity(capacity));
        }

        Ok(Self {
            entries: RwLock::new(HashMap::new()),
            clock: AccessClock::new(),
            stats: StatsCounters::new(),
            capacity,
        })
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is overwritten and the key becomes
    /// the most recently used. If the store is full, the least recently used
    /// entry is evicted first.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let mut entries = self.entries.write();
        let stamp = self.clock.tick();

        if let Some(entry) = entries.get_mut(&key) {
            entry.value = value;
            entry.touch(stamp);
            return;
        }

        // Victim search is O(capacity) and readers wait on the write lock
        // meanwhile. Reads stay lock-shared in exchange.
        if entries.len() >= self.capacity {
            if let Some(evicted) = lru::oldest_key(&*entries) {
                entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "Evicted least recently used entry");
            }
        }

        entries.insert(key, CacheEntry::new(value, stamp));
    }

    // == Get ==
    /// Retrieves a copy of the value stored under `key`.
    ///
    /// A hit marks the key as most recently used. A miss leaves the contents
    /// and recency order untouched.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read();

        match entries.get(key) {
            Some(entry) => {
                entry.touch(self.clock.tick());
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len(), self.capacity)
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
