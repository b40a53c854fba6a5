//! Thread handlers
//!
//! Endpoints for creating, listing and fetching threads.

use axum::{extract::State, Json};
use forum_service::dto::{CreateThreadRequest, ThreadResponse};
use forum_service::ThreadService;

use crate::extractors::{ThreadIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List all threads with their posts
///
/// GET /api/threads
pub async fn list_threads(State(state): State<AppState>) -> ApiResult<Json<Vec<ThreadResponse>>> {
    let service = ThreadService::new(state.service_context());
    let threads = service.list_threads().await?;
    Ok(Json(threads))
}

/// Create a thread
///
/// POST /api/threads
pub async fn create_thread(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateThreadRequest>,
) -> ApiResult<Json<ThreadResponse>> {
    let service = ThreadService::new(state.service_context());
    let thread = service.create_thread(request).await?;
    Ok(Json(thread))
}

/// Get thread by ID
///
/// GET /api/threads/{thread_id}
pub async fn get_thread(
    State(state): State<AppState>,
    ThreadIdPath(thread_id): ThreadIdPath,
) -> ApiResult<Json<ThreadResponse>> {
    let service = ThreadService::new(state.service_context());
    let thread = service.get_thread(thread_id).await?;
    Ok(Json(thread))
}
