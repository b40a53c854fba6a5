//! SQLite implementation of ThreadRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use forum_core::entities::{Post, Thread, ThreadWithPosts};
use forum_core::traits::{RepoResult, ThreadRepository};
use forum_core::value_objects::ThreadId;

use crate::mappers::attach_posts;
use crate::models::{PostModel, ThreadModel};

use super::error::map_db_error;

/// SQLite implementation of ThreadRepository
#[derive(Clone)]
pub struct SqliteThreadRepository {
    pool: SqlitePool,
}

impl SqliteThreadRepository {
    /// Create a new SqliteThreadRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for SqliteThreadRepository {
    #[instrument(skip(self))]
    async fn find_with_posts(&self, id: ThreadId) -> RepoResult<Option<ThreadWithPosts>> {
        // Both reads see the same snapshot
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let thread = sqlx::query_as::<_, ThreadModel>(
            r"
            SELECT id, title, content, created_at
            FROM threads
            WHERE id = ?
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(thread) = thread else {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(None);
        };

        let posts = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, content, thread_id, created_at
            FROM posts
            WHERE thread_id = ?
            ORDER BY id ASC
            ",
        )
        .bind(id.into_inner())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let posts = posts.into_iter().map(Post::from).collect();
        Ok(Some(Thread::from(thread).with_posts(posts)))
    }

    #[instrument(skip(self))]
    async fn list_with_posts(&self) -> RepoResult<Vec<ThreadWithPosts>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let threads = sqlx::query_as::<_, ThreadModel>(
            r"
            SELECT id, title, content, created_at
            FROM threads
            ORDER BY id ASC
            ",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let posts = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, content, thread_id, created_at
            FROM posts
            ORDER BY id ASC
            ",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(attach_posts(threads, posts))
    }

    #[instrument(skip(self, content))]
    async fn create(&self, title: &str, content: &str) -> RepoResult<Thread> {
        let model = sqlx::query_as::<_, ThreadModel>(
            r"
            INSERT INTO threads (title, content, created_at)
            VALUES (?, ?, ?)
            RETURNING id, title, content, created_at
            ",
        )
        .bind(title)
        .bind(content)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Thread::from(model))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: ThreadId) -> RepoResult<bool> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM threads WHERE id = ?")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count > 0)
    }
}
