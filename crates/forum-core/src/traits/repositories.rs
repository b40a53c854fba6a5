//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Post, Thread, ThreadWithPosts};
use crate::error::DomainError;
use crate::value_objects::ThreadId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Thread Repository
// ============================================================================

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find thread by ID together with its posts (ascending by post id)
    async fn find_with_posts(&self, id: ThreadId) -> RepoResult<Option<ThreadWithPosts>>;

    /// List every thread ascending by id, each with its posts
    async fn list_with_posts(&self) -> RepoResult<Vec<ThreadWithPosts>>;

    /// Insert a new thread; id and timestamp are assigned by the store
    async fn create(&self, title: &str, content: &str) -> RepoResult<Thread>;

    /// Check whether a thread exists
    async fn exists(&self, id: ThreadId) -> RepoResult<bool>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts of a thread ascending by id
    async fn find_by_thread(&self, thread_id: ThreadId) -> RepoResult<Vec<Post>>;

    /// Insert a new post under an existing thread.
    ///
    /// Returns `DomainError::ThreadNotFound` without writing anything when the
    /// thread does not exist.
    async fn create(&self, thread_id: ThreadId, content: &str) -> RepoResult<Post>;
}
