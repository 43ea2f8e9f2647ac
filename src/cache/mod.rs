//! Cache Module
//!
//! Provides a bounded in-memory store with LRU eviction, shared between
//! request handlers.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::AccessClock;
pub use stats::{CacheStats, StatsCounters};
pub use store::LruStore;
