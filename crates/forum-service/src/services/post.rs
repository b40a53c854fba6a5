//! Post service
//!
//! Handles replies to threads.

use forum_core::ThreadId;
use tracing::{info, instrument};

use crate::dto::{CreatePostRequest, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reply to a thread
    ///
    /// The repository checks the thread and inserts atomically; a missing
    /// thread surfaces as `NotFound` and nothing is written.
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        thread_id: ThreadId,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .create(thread_id, &request.content)
            .await?;

        info!(post_id = %post.id, thread_id = %thread_id, "Post created");

        Ok(PostResponse::from(post))
    }

    /// List a thread's posts, oldest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self, thread_id: ThreadId) -> ServiceResult<Vec<PostResponse>> {
        if !self.ctx.thread_repo().exists(thread_id).await? {
            return Err(ServiceError::not_found("Thread", thread_id.to_string()));
        }

        let posts = self.ctx.post_repo().find_by_thread(thread_id).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }
}
