//! Thread service
//!
//! Handles thread creation and queries.

use forum_core::ThreadId;
use tracing::{info, instrument};

use crate::dto::{CreateThreadRequest, ThreadResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every thread, oldest first, each with its posts
    #[instrument(skip(self))]
    pub async fn list_threads(&self) -> ServiceResult<Vec<ThreadResponse>> {
        let threads = self.ctx.thread_repo().list_with_posts().await?;
        Ok(threads.into_iter().map(ThreadResponse::from).collect())
    }

    /// Create a new thread
    #[instrument(skip(self, request))]
    pub async fn create_thread(&self, request: CreateThreadRequest) -> ServiceResult<ThreadResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .create(&request.title, &request.content)
            .await?;

        info!(thread_id = %thread.id, "Thread created");

        Ok(ThreadResponse::from(thread))
    }

    /// Get a thread by ID, with its posts
    #[instrument(skip(self))]
    pub async fn get_thread(&self, thread_id: ThreadId) -> ServiceResult<ThreadResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .find_with_posts(thread_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", thread_id.to_string()))?;

        Ok(ThreadResponse::from(thread))
    }
}
