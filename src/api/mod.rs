//! API Module
//!
//! HTTP handlers and routing for the blog REST API.
//!
//! # Endpoints
//! - `GET|POST /posts` - List or create posts
//! - `GET /posts/paginated` - One page of posts
//! - `GET|PUT|DELETE /posts/:id` - Read, update or delete a post
//! - `GET /posts/slug/:slug` - Read a post by slug
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
