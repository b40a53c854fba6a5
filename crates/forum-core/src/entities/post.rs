//! Post entity - a reply belonging to exactly one thread

use chrono::{DateTime, Utc};

use crate::value_objects::{PostId, ThreadId};

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub thread_id: ThreadId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a Post from store-assigned fields
    pub fn new(id: PostId, thread_id: ThreadId, content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            thread_id,
            content,
            created_at,
        }
    }

    /// Check whether this post replies to the given thread
    #[inline]
    pub fn belongs_to(&self, thread_id: ThreadId) -> bool {
        self.thread_id == thread_id
    }
}
