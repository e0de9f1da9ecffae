//! Request DTOs for the blog API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use uuid::Uuid;

/// Allowed title length in characters
pub const TITLE_LENGTH: std::ops::RangeInclusive<usize> = 2..=100;
/// Allowed content length in characters
pub const CONTENT_LENGTH: std::ops::RangeInclusive<usize> = 2..=1000;

fn validate_text(
    field: &str,
    value: &str,
    range: std::ops::RangeInclusive<usize>,
) -> Option<String> {
    let len = value.trim().chars().count();
    if range.contains(&len) {
        None
    } else {
        Some(format!(
            "{} must be between {} and {} characters",
            field,
            range.start(),
            range.end()
        ))
    }
}

/// Request body for creating a post (POST /posts)
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    /// Author of the post
    pub author_id: Uuid,
}

impl CreatePostRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_text("Title", &self.title, TITLE_LENGTH)
            .or_else(|| validate_text("Content", &self.content, CONTENT_LENGTH))
    }
}

/// Request body for updating a post (PUT /posts/:id)
///
/// The slug is not updatable; it stays stable for the life of the post.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub dislikes: u32,
}

impl UpdatePostRequest {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        validate_text("Title", &self.title, TITLE_LENGTH)
            .or_else(|| validate_text("Content", &self.content, CONTENT_LENGTH))
    }
}

/// Query string for GET /posts/paginated
///
/// Signed so that negative values reach pagination normalisation instead of
/// failing to parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
