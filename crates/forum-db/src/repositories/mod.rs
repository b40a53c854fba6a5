//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in forum-core.

mod error;
mod post;
mod thread;

pub use post::SqlitePostRepository;
pub use thread::SqliteThreadRepository;
