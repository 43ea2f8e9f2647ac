//! LRU Tracking Module
//!
//! Implements Least Recently Used ordering for cache eviction.
//!
//! Every access draws a tick from a shared [`AccessClock`] and stamps the
//! entry with it. The eviction candidate is the entry holding the smallest
//! stamp. Ticks are unique, so the candidate is always well defined.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::cache::CacheEntry;

// == Access Clock ==
/// Monotonic logical clock handing out access stamps.
#[derive(Debug, Default)]
pub struct AccessClock {
    /// Next tick to hand out
    next: AtomicU64,
}

impl AccessClock {
    // == Constructor ==
    /// Creates a clock starting at zero.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    // == Tick ==
    /// Returns a fresh stamp, strictly greater than every earlier one.
    pub fn tick(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

// == Oldest Key ==
/// Returns the key whose entry was touched least recently.
///
/// Scans every entry, so the cost grows linearly with the store size.
/// Returns None if there are no entries.
pub fn oldest_key<V>(entries: &HashMap<String, CacheEntry<V>>) -> Option<String> {
    entries
        .iter()
        .min_by_key(|(_, entry)| entry.last_access())
        .map(|(key, _)| key.clone())
}
