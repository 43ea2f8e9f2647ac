//! Cache Entry Module
//!
//! Defines a stored value together with the logical time it was last touched.

use std::sync::atomic::{AtomicU64, Ordering};

// == Cache Entry ==
/// Represents a single cache entry with its value and access stamp.
///
/// The stamp is atomic so that readers holding only the shared lock can
/// still mark the entry as recently used.
#[derive(Debug)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Logical access time, larger means more recent
    last_access: AtomicU64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the given access time.
    pub fn new(value: V, stamp: u64) -> Self {
        Self {
            value,
            last_access: AtomicU64::new(stamp),
        }
    }

    // == Touch ==
    /// Records an access at `stamp`.
    ///
    /// Never moves the stamp backwards, so two readers racing on the same
    /// entry leave it at the later of their two ticks.
    pub fn touch(&self, stamp: u64) {
        self.last_access.fetch_max(stamp, Ordering::Relaxed);
    }

    // == Last Access ==
    /// Returns the logical time of the most recent access.
    pub fn last_access(&self) -> u64 {
        self.last_access.load(Ordering::Relaxed)
    }
}
