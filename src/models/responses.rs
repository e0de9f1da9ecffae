//! Response DTOs for the blog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use uuid::Uuid;

use crate::cache::PostCacheStats;
use crate::models::Post;

/// Response body for GET /posts
#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<Post>,
    pub total: usize,
}

impl PostListResponse {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            total: posts.len(),
            posts,
        }
    }
}

/// Response body for GET /posts/paginated
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedPostsResponse {
    pub posts: Vec<Post>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginatedPostsResponse {
    /// Creates a new PaginatedPostsResponse, deriving the page count
    pub fn new(posts: Vec<Post>, page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };
        Self {
            posts,
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// Response body for DELETE /posts/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The post that was deleted
    pub id: Uuid,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: Uuid) -> Self {
        Self {
            message: format!("Post '{}' deleted successfully", id),
            id,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub caches: PostCacheStats,
    /// Combined hit rate across the three caches
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(caches: PostCacheStats) -> Self {
        let hit_rate = caches.combined().hit_rate();
        Self { caches, hit_rate }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStats;

    #[test]
    fn test_paginated_response_total_pages() {
        let resp = PaginatedPostsResponse::new(Vec::new(), 1, 10, 21);
        assert_eq!(resp.total_pages, 3);

        let resp = PaginatedPostsResponse::new(Vec::new(), 1, 10, 20);
        assert_eq!(resp.total_pages, 2);

        let resp = PaginatedPostsResponse::new(Vec::new(), 1, 10, 0);
        assert_eq!(resp.total_pages, 0);
    }

    #[test]
    fn test_delete_response_serialize() {
        let id = Uuid::new_v4();
        let json = serde_json::to_string(&DeleteResponse::new(id)).unwrap();
        assert!(json.contains(&id.to_string()));
        assert!(json.contains("deleted"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = |hits, misses| CacheStats {
            hits,
            misses,
            ..CacheStats::default()
        };
        let resp = StatsResponse::new(PostCacheStats {
            posts: stats(6, 2),
            lists: stats(2, 0),
            pages: stats(0, 0),
        });
        assert!((resp.hit_rate - 0.8).abs() < 0.001);

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["posts"]["hits"], 6);
        assert!(json.get("pages").is_some());
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new(PostCacheStats {
            posts: CacheStats::default(),
            lists: CacheStats::default(),
            pages: CacheStats::default(),
        });
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
