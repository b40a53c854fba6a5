//! Post entity <-> model mapper

use forum_core::entities::Post;
use forum_core::value_objects::{PostId, ThreadId};

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            thread_id: ThreadId::new(model.thread_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}
