//! Post handlers
//!
//! Endpoints for replying to a thread and reading its replies.

use axum::{extract::State, Json};
use forum_service::dto::{CreatePostRequest, PostResponse};
use forum_service::PostService;

use crate::extractors::{ThreadIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Reply to a thread
///
/// POST /api/threads/{thread_id}/posts
pub async fn create_post(
    State(state): State<AppState>,
    ThreadIdPath(thread_id): ThreadIdPath,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(thread_id, request).await?;
    Ok(Json(post))
}

/// List a thread's posts
///
/// GET /api/threads/{thread_id}/posts
pub async fn list_posts(
    State(state): State<AppState>,
    ThreadIdPath(thread_id): ThreadIdPath,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts(thread_id).await?;
    Ok(Json(posts))
}
