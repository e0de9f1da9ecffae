//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

// == Cache Entry ==
/// A single cached value plus its expiration metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates an entry expiring `ttl` after `now_ms`.
    ///
    /// A zero `ttl` produces an entry that never expires.
    pub fn new(value: T, now_ms: u64, ttl: Duration) -> Self {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            Some(now_ms.saturating_add(ttl.as_millis() as u64))
        };

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired at `now_ms`.
    ///
    /// The comparison is strict: an entry stays live at exactly its
    /// expiration instant and expires on the next millisecond.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms > expires,
            None => false,
        }
    }
}
