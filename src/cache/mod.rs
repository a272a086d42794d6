//! Cache Module
//!
//! Provides an in-memory, time-expiring cache for raw HTTP response bodies.
//!
//! Entries are keyed by request URL and retired by a background reaper once
//! they outlive the construction-time interval.

mod entry;
mod response_cache;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use response_cache::ResponseCache;
pub use stats::CacheStats;
pub use store::CacheStore;
