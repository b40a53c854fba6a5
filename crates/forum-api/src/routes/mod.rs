//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{routing::get, Router};

use crate::handlers::{health, posts, threads};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(thread_routes())
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Thread and post routes
fn thread_routes() -> Router<AppState> {
    Router::new()
        .route("/threads", get(threads::list_threads).post(threads::create_thread))
        .route("/threads/:thread_id", get(threads::get_thread))
        .route(
            "/threads/:thread_id/posts",
            get(posts::list_posts).post(posts::create_post),
        )
}
