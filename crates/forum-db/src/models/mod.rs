//! Database models - SQLx-compatible structs for SQLite tables

mod post;
mod thread;

pub use post::PostModel;
pub use thread::ThreadModel;
