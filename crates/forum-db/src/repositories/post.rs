//! SQLite implementation of PostRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use forum_core::entities::Post;
use forum_core::traits::{PostRepository, RepoResult};
use forum_core::value_objects::ThreadId;

use crate::models::PostModel;

use super::error::{map_db_error, map_foreign_key_violation, thread_not_found};

/// SQLite implementation of PostRepository
#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    /// Create a new SqlitePostRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    #[instrument(skip(self))]
    async fn find_by_thread(&self, thread_id: ThreadId) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, content, thread_id, created_at
            FROM posts
            WHERE thread_id = ?
            ORDER BY id ASC
            ",
        )
        .bind(thread_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self, content))]
    async fn create(&self, thread_id: ThreadId, content: &str) -> RepoResult<Post> {
        // Existence check and insert are one statement, so no read lock is
        // held while waiting for the write lock
        let model = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (content, thread_id, created_at)
            SELECT ?, id, ?
            FROM threads
            WHERE id = ?
            RETURNING id, content, thread_id, created_at
            ",
        )
        .bind(content)
        .bind(Utc::now())
        .bind(thread_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || thread_not_found(thread_id)))?;

        let Some(model) = model else {
            debug!(thread_id = %thread_id, "Rejected post for missing thread");
            return Err(thread_not_found(thread_id));
        };

        Ok(Post::from(model))
    }
}
