//! Post Store Module
//!
//! The persistence boundary the post service reads from and writes to.

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Post;

pub use memory::InMemoryPostRepository;

/// Storage for posts.
///
/// List reads return posts most-recent-first. Lookups report a missing post
/// as `Ok(None)`; `Err` is reserved for the store itself failing.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Stores a new post. Fails with `Conflict` when the id or slug is taken.
    async fn insert(&self, post: Post) -> Result<Post>;

    /// Replaces an existing post. Fails with `NotFound` when absent.
    async fn update(&self, post: Post) -> Result<Post>;

    /// Removes a post. Fails with `NotFound` when absent.
    async fn delete(&self, id: Uuid) -> Result<()>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>>;

    async fn find_all(&self) -> Result<Vec<Post>>;

    /// Returns up to `limit` posts after skipping `offset`, plus the total
    /// number of posts.
    async fn find_page(&self, limit: u32, offset: u64) -> Result<(Vec<Post>, u64)>;

    async fn slug_exists(&self, slug: &str) -> Result<bool>;
}
