//! Domain entities - core business objects

mod post;
mod thread;

pub use post::Post;
pub use thread::{Thread, ThreadWithPosts};
