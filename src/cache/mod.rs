//! Cache Module
//!
//! Provides a generic in-memory cache with TTL expiration, and the post
//! cache facade built on top of it.

mod clock;
mod entry;
pub mod keys;
mod post_cache;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use post_cache::{PaginatedPosts, PostCache, PostCacheStats};
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// Default TTL applied to cached posts
pub const DEFAULT_TTL: std::time::Duration = std::time::Duration::from_secs(300);

/// Default interval between expiry sweeps
pub const DEFAULT_SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);
