//! Thread entity <-> model mapper

use std::collections::HashMap;

use forum_core::entities::{Post, Thread, ThreadWithPosts};
use forum_core::value_objects::ThreadId;

use crate::models::{PostModel, ThreadModel};

/// Convert ThreadModel to Thread entity
impl From<ThreadModel> for Thread {
    fn from(model: ThreadModel) -> Self {
        Thread {
            id: ThreadId::new(model.id),
            title: model.title,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

/// Group post rows under their threads.
///
/// Thread order and per-thread post order follow the input order; posts whose
/// thread is not among `threads` are dropped.
pub fn attach_posts(threads: Vec<ThreadModel>, posts: Vec<PostModel>) -> Vec<ThreadWithPosts> {
    let mut by_thread: HashMap<i64, Vec<Post>> = HashMap::with_capacity(threads.len());
    for post in posts {
        by_thread.entry(post.thread_id).or_default().push(Post::from(post));
    }

    threads
        .into_iter()
        .map(|model| {
            let posts = by_thread.remove(&model.id).unwrap_or_default();
            Thread::from(model).with_posts(posts)
        })
        .collect()
}
