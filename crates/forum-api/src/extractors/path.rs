//! Path parameter extractors
//!
//! Type-safe extraction of store ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use forum_core::ThreadId;

use crate::response::ApiError;

/// Extract the `thread_id` path segment as a `ThreadId`
///
/// A segment that is not an integer is rejected with 422.
#[derive(Debug, Clone, Copy)]
pub struct ThreadIdPath(pub ThreadId);

#[async_trait]
impl<S> FromRequestParts<S> for ThreadIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        raw.parse()
            .map(ThreadIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid thread_id format"))
    }
}
