//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry: an opaque payload and its insertion time.
///
/// The cache never interprets the payload; callers store raw HTTP response
/// bodies and decode them on the way out.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub payload: Vec<u8>,
    /// Monotonic timestamp captured at insertion time
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current instant.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns the time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks if the entry has outlived the given maximum age.
    ///
    /// Boundary condition: an entry is considered expired when its age is
    /// greater than or equal to `max_age`, so an entry exactly at the TTL
    /// boundary is eligible for reaping.
    pub fn is_expired(&self, max_age: Duration) -> bool {
        self.age() >= max_age
    }
}
