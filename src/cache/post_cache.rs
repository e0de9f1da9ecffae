//! Post Cache Module
//!
//! Read-through / write-invalidate cache in front of the post store, built
//! from three independent TTL caches.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::cache::keys::{post_id_key, post_slug_key, posts_page_key, ALL_POSTS_KEY};
use crate::cache::{CacheStats, Clock, SystemClock, TtlCache};
use crate::models::Post;
use crate::tasks::SweepHandle;

// == Paginated Posts ==
/// One cached page of posts plus the total post count at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPosts {
    pub posts: Vec<Post>,
    pub total: u64,
}

// == Post Cache Stats ==
/// Statistics for each cache held by [`PostCache`].
#[derive(Debug, Clone, Serialize)]
pub struct PostCacheStats {
    pub posts: CacheStats,
    pub lists: CacheStats,
    pub pages: CacheStats,
}

impl PostCacheStats {
    /// Sums the three caches into one snapshot.
    pub fn combined(&self) -> CacheStats {
        [&self.posts, &self.lists, &self.pages]
            .into_iter()
            .fold(CacheStats::default(), |acc, stats| CacheStats {
                hits: acc.hits + stats.hits,
                misses: acc.misses + stats.misses,
                expired_evictions: acc.expired_evictions + stats.expired_evictions,
                total_entries: acc.total_entries + stats.total_entries,
            })
    }
}

// == Post Cache ==
/// Cache facade for posts addressed by id, by slug, as a full list, or as a
/// page.
///
/// Cloning is cheap and every clone shares the same underlying caches.
#[derive(Debug, Clone)]
pub struct PostCache {
    /// Single posts under both `post:id:` and `post:slug:` keys
    posts: Arc<TtlCache<Arc<Post>>>,
    /// The full post list
    lists: Arc<TtlCache<Arc<Vec<Post>>>>,
    /// Pages keyed by page number and page size
    pages: Arc<TtlCache<Arc<PaginatedPosts>>>,
}

impl PostCache {
    /// Creates a post cache with no background sweep.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates a post cache whose three caches share `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            posts: Arc::new(TtlCache::with_clock(ttl, clock.clone())),
            lists: Arc::new(TtlCache::with_clock(ttl, clock.clone())),
            pages: Arc::new(TtlCache::with_clock(ttl, clock)),
        }
    }

    /// Creates a post cache and starts one sweep task per inner cache.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(ttl: Duration, sweep_interval: Duration) -> (Self, SweepHandle) {
        let cache = Self::new(ttl);
        let sweeper = cache.spawn_sweepers(sweep_interval);
        (cache, sweeper)
    }

    /// Starts sweeping this cache's inner caches under one handle.
    pub fn spawn_sweepers(&self, sweep_interval: Duration) -> SweepHandle {
        let mut sweeper = SweepHandle::new(sweep_interval);
        sweeper.spawn("posts", self.posts.clone());
        sweeper.spawn("lists", self.lists.clone());
        sweeper.spawn("pages", self.pages.clone());
        sweeper
    }

    // == Single Posts ==
    pub fn get_by_id(&self, id: Uuid) -> Option<Arc<Post>> {
        self.posts.get(&post_id_key(id))
    }

    pub fn set_by_id(&self, id: Uuid, post: Arc<Post>) {
        self.posts.set(post_id_key(id), post);
    }

    /// Slug lookups share the id cache but not its keys: a post cached by id
    /// is not visible here until `set_by_slug` is called as well.
    pub fn get_by_slug(&self, slug: &str) -> Option<Arc<Post>> {
        self.posts.get(&post_slug_key(slug))
    }

    pub fn set_by_slug(&self, slug: &str, post: Arc<Post>) {
        self.posts.set(post_slug_key(slug), post);
    }

    // == Lists ==
    pub fn get_all(&self) -> Option<Arc<Vec<Post>>> {
        self.lists.get(ALL_POSTS_KEY)
    }

    pub fn set_all(&self, posts: Arc<Vec<Post>>) {
        self.lists.set(ALL_POSTS_KEY, posts);
    }

    pub fn get_paginated(&self, page: u32, limit: u32) -> Option<Arc<PaginatedPosts>> {
        self.pages.get(&posts_page_key(page, limit))
    }

    /// Caches one page and returns the shared copy that was stored.
    pub fn set_paginated(
        &self,
        page: u32,
        limit: u32,
        posts: Vec<Post>,
        total: u64,
    ) -> Arc<PaginatedPosts> {
        let result = Arc::new(PaginatedPosts { posts, total });
        self.pages.set(posts_page_key(page, limit), result.clone());
        result
    }

    // == Invalidation ==
    /// Drops the cached post under its id and, when `slug` is non-empty,
    /// under its slug.
    pub fn invalidate_post(&self, id: Uuid, slug: &str) {
        self.posts.delete(&post_id_key(id));
        if !slug.is_empty() {
            self.posts.delete(&post_slug_key(slug));
        }
        debug!(%id, slug, "invalidated cached post");
    }

    /// Drops the full list and every cached page.
    ///
    /// Pages are never invalidated individually.
    pub fn invalidate_lists(&self) {
        self.lists.clear();
        self.pages.clear();
        debug!("invalidated cached post lists");
    }

    pub fn invalidate_all(&self) {
        self.posts.clear();
        self.lists.clear();
        self.pages.clear();
        debug!("invalidated all cached posts");
    }

    // == Stats ==
    pub fn stats(&self) -> PostCacheStats {
        PostCacheStats {
            posts: self.posts.stats(),
            lists: self.lists.stats(),
            pages: self.pages.stats(),
        }
    }
}
