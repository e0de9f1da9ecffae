//! API Routes
//!
//! Configures the Axum router with all blog endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_post_handler, delete_post_handler, get_post_by_slug_handler, get_post_handler,
    health_handler, list_posts_handler, paginated_posts_handler, stats_handler,
    update_post_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /posts` - All posts, newest first
/// - `POST /posts` - Create a post
/// - `GET /posts/paginated?page=&limit=` - One page of posts
/// - `GET /posts/:id` - A post by id
/// - `PUT /posts/:id` - Update a post
/// - `DELETE /posts/:id` - Delete a post
/// - `GET /posts/slug/:slug` - A post by slug
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .route("/posts/paginated", get(paginated_posts_handler))
        .route(
            "/posts/:id",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route("/posts/slug/:slug", get(get_post_by_slug_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
