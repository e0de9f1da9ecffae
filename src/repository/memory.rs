//! In-memory post store

use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::PostRepository;
use crate::error::{BlogError, Result};
use crate::models::Post;

/// Post store held in a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All posts, newest first; ties broken by id for a stable order.
    fn sorted(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.posts.read().values().cloned().collect();
        posts.sort_by_key(|p| (Reverse(p.created_at), p.id));
        posts
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post> {
        let mut posts = self.posts.write();
        if posts.contains_key(&post.id) {
            return Err(BlogError::Conflict(format!("post id '{}' already exists", post.id)));
        }
        if posts.values().any(|p| p.slug == post.slug) {
            return Err(BlogError::Conflict(format!("slug '{}' already exists", post.slug)));
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post> {
        let mut posts = self.posts.write();
        if posts.values().any(|p| p.slug == post.slug && p.id != post.id) {
            return Err(BlogError::Conflict(format!("slug '{}' already exists", post.slug)));
        }
        match posts.get_mut(&post.id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(post)
            }
            None => Err(BlogError::NotFound(format!("id '{}'", post.id))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.posts
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| BlogError::NotFound(format!("id '{}'", id)))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>> {
        Ok(self.posts.read().get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        Ok(self.posts.read().values().find(|p| p.slug == slug).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>> {
        Ok(self.sorted())
    }

    async fn find_page(&self, limit: u32, offset: u64) -> Result<(Vec<Post>, u64)> {
        let all = self.sorted();
        let total = all.len() as u64;
        let page = all
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        Ok(self.posts.read().values().any(|p| p.slug == slug))
    }
}
