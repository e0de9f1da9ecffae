//! Domain and transfer models for the blog API
//!
//! `Post` is the stored entity; the request and response modules hold the
//! DTOs used for serializing/deserializing HTTP bodies.

pub mod post;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use post::Post;
pub use requests::{CreatePostRequest, PaginationQuery, UpdatePostRequest};
pub use responses::{
    DeleteResponse, ErrorResponse, HealthResponse, PaginatedPostsResponse, PostListResponse,
    StatsResponse,
};
