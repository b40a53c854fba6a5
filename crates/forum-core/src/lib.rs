//! # forum-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Post, Thread, ThreadWithPosts};
pub use error::DomainError;
pub use traits::{PostRepository, RepoResult, ThreadRepository};
pub use value_objects::{IdParseError, PostId, ThreadId};
