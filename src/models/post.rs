//! Post entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post as held by the post store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// URL-safe identifier, unique across posts
    pub slug: String,
    pub likes: u32,
    pub dislikes: u32,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    /// Author
    pub user_id: Uuid,
}

impl Post {
    /// Creates a post with a fresh id, zeroed counters and the current time.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        slug: impl Into<String>,
        user_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            slug: slug.into(),
            likes: 0,
            dislikes: 0,
            views: 0,
            created_at: Utc::now(),
            user_id,
        }
    }
}
