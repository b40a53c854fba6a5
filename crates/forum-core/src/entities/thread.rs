//! Thread entity - a top-level discussion topic

use chrono::{DateTime, Utc};

use crate::entities::Post;
use crate::value_objects::ThreadId;

/// Thread entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Thread {
    /// Create a Thread from store-assigned fields
    pub fn new(id: ThreadId, title: String, content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            content,
            created_at,
        }
    }

    /// Attach the thread's posts, producing the rich view
    pub fn with_posts(self, posts: Vec<Post>) -> ThreadWithPosts {
        ThreadWithPosts { thread: self, posts }
    }
}

/// A thread together with its replies, assembled by a repository query.
///
/// Posts refer back to the thread only through `thread_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadWithPosts {
    pub thread: Thread,
    pub posts: Vec<Post>,
}

impl ThreadWithPosts {
    /// Number of replies
    #[inline]
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}
