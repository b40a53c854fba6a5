//! Service context - dependency container for services
//!
//! Holds the store handle and the repositories the services depend on.

use std::sync::Arc;

use forum_core::traits::{PostRepository, ThreadRepository};
use forum_db::{SqlitePool, SqlitePostRepository, SqliteThreadRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are held as trait objects so tests and alternative stores can
/// swap them out; the pool is kept for health checks.
#[derive(Clone)]
pub struct ServiceContext {
    pool: SqlitePool,
    thread_repo: Arc<dyn ThreadRepository>,
    post_repo: Arc<dyn PostRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: SqlitePool,
        thread_repo: Arc<dyn ThreadRepository>,
        post_repo: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            pool,
            thread_repo,
            post_repo,
        }
    }

    /// Wire the SQLite repositories over a single pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        let thread_repo = Arc::new(SqliteThreadRepository::new(pool.clone()));
        let post_repo = Arc::new(SqlitePostRepository::new(pool.clone()));
        Self::new(pool, thread_repo, post_repo)
    }

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the thread repository
    pub fn thread_repo(&self) -> &dyn ThreadRepository {
        self.thread_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    thread_repo: Option<Arc<dyn ThreadRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn thread_repo(mut self, repo: Arc<dyn ThreadRepository>) -> Self {
        self.thread_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// Repositories that were not supplied default to the SQLite ones over
    /// the configured pool.
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if no pool was supplied
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::internal("pool is required"))?;

        let thread_repo = self
            .thread_repo
            .unwrap_or_else(|| Arc::new(SqliteThreadRepository::new(pool.clone())));
        let post_repo = self
            .post_repo
            .unwrap_or_else(|| Arc::new(SqlitePostRepository::new(pool.clone())));

        Ok(ServiceContext::new(pool, thread_repo, post_repo))
    }
}
