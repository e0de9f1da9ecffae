//! Cache key definitions.
//!
//! Single posts live in one cache under two disjoint key namespaces (id and
//! slug); lists and pages live in their own caches.

use uuid::Uuid;

/// Prefix of every single-post key addressed by id.
pub const POST_BY_ID_PREFIX: &str = "post:id:";
/// Prefix of every single-post key addressed by slug.
pub const POST_BY_SLUG_PREFIX: &str = "post:slug:";
/// Key of the full post list.
pub const ALL_POSTS_KEY: &str = "posts:all";
/// Prefix of every paginated-list key.
pub const POSTS_PAGE_PREFIX: &str = "posts:page:";

/// Key for a post looked up by id.
pub fn post_id_key(id: Uuid) -> String {
    format!("{POST_BY_ID_PREFIX}{id}")
}

/// Key for a post looked up by slug.
pub fn post_slug_key(slug: &str) -> String {
    format!("{POST_BY_SLUG_PREFIX}{slug}")
}

/// Key for one page of the post list.
pub fn posts_page_key(page: u32, limit: u32) -> String {
    format!("{POSTS_PAGE_PREFIX}{page}:{limit}")
}
