//! # forum-db
//!
//! Database layer implementing repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for the repository traits
//! defined in `forum-core`. It handles:
//!
//! - Connection pool management
//! - Idempotent schema creation
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_core::ThreadRepository;
//! use forum_db::{create_pool, init_schema, DatabaseConfig, SqliteThreadRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     init_schema(&pool).await?;
//!
//!     let threads = SqliteThreadRepository::new(pool);
//!     let thread = threads.create("Hello", "First thread").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, ping, DatabaseConfig, SqlitePool};
pub use repositories::{SqlitePostRepository, SqliteThreadRepository};
pub use schema::init_schema;
