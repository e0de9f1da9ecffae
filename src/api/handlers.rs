//! API Handlers
//!
//! HTTP request handlers for each blog endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::cache::PostCache;
use crate::error::{BlogError, Result};
use crate::models::{
    CreatePostRequest, DeleteResponse, HealthResponse, PaginatedPostsResponse, PaginationQuery,
    Post, PostListResponse, StatsResponse, UpdatePostRequest,
};
use crate::repository::{InMemoryPostRepository, PostRepository};
use crate::service::PostService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached access to posts
    pub posts: PostService,
}

impl AppState {
    /// Creates a new AppState serving `repository` through `cache`.
    pub fn new(repository: Arc<dyn PostRepository>, cache: PostCache) -> Self {
        Self {
            posts: PostService::new(repository, cache),
        }
    }

    /// Creates a new AppState backed by an empty in-memory store.
    pub fn in_memory(cache: PostCache) -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()), cache)
    }
}

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| BlogError::InvalidRequest(format!("'{}' is not a valid post id", raw)))
}

/// Handler for GET /posts
pub async fn list_posts_handler(State(state): State<AppState>) -> Result<Json<PostListResponse>> {
    let posts = state.posts.get_all_posts().await?;
    Ok(Json(PostListResponse::new(posts.as_ref().clone())))
}

/// Handler for GET /posts/paginated?page=&limit=
///
/// Both parameters are required; out-of-range values fall back to the
/// first page of ten. Non-numeric values are rejected as invalid requests.
pub async fn paginated_posts_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<Json<PaginatedPostsResponse>> {
    let Query(query) =
        query.map_err(|rejection| BlogError::InvalidRequest(rejection.body_text()))?;

    let (Some(page), Some(limit)) = (query.page, query.limit) else {
        return Err(BlogError::InvalidRequest(
            "You need to provide values for page and limit".to_string(),
        ));
    };

    let page = state.posts.get_paginated_posts(page, limit).await?;

    Ok(Json(PaginatedPostsResponse::new(
        page.result.posts.clone(),
        page.page,
        page.limit,
        page.result.total,
    )))
}

/// Handler for GET /posts/:id
pub async fn get_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    let post = state.posts.get_post_by_id(parse_id(&id)?).await?;
    Ok(Json(post.as_ref().clone()))
}

/// Handler for GET /posts/slug/:slug
pub async fn get_post_by_slug_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Post>> {
    let post = state.posts.get_post_by_slug(&slug).await?;
    Ok(Json(post.as_ref().clone()))
}

/// Handler for POST /posts
pub async fn create_post_handler(
    State(state): State<AppState>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>)> {
    let post = state.posts.create_post(req).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Handler for PUT /posts/:id
pub async fn update_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<Post>> {
    let post = state.posts.update_post(parse_id(&id)?, req).await?;
    Ok(Json(post))
}

/// Handler for DELETE /posts/:id
pub async fn delete_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    state.posts.delete_post(id).await?;
    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /stats
///
/// Returns hit/miss counters for each post cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.posts.cache().stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
