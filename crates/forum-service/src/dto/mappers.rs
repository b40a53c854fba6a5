//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use forum_core::entities::{Post, Thread, ThreadWithPosts};

use super::responses::{PostResponse, ThreadResponse};

// ============================================================================
// Post Mappers
// ============================================================================

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into_inner(),
            content: post.content,
            thread_id: post.thread_id.into_inner(),
            created_at: post.created_at,
        }
    }
}

// ============================================================================
// Thread Mappers
// ============================================================================

/// A freshly created thread has no posts yet
impl From<Thread> for ThreadResponse {
    fn from(thread: Thread) -> Self {
        Self {
            id: thread.id.into_inner(),
            title: thread.title,
            content: thread.content,
            created_at: thread.created_at,
            posts: Vec::new(),
        }
    }
}

impl From<ThreadWithPosts> for ThreadResponse {
    fn from(rich: ThreadWithPosts) -> Self {
        let ThreadWithPosts { thread, posts } = rich;
        Self {
            posts: posts.into_iter().map(PostResponse::from).collect(),
            ..Self::from(thread)
        }
    }
}
