//! Storage schema
//!
//! Two relations: `threads` and `posts`, with `posts.thread_id` referencing
//! `threads.id`. `AUTOINCREMENT` keeps SQLite from handing out an id twice.

use sqlx::SqlitePool;
use tracing::{debug, instrument};

const STATEMENTS: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS threads (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT NOT NULL,
        content     TEXT NOT NULL,
        created_at  TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS posts (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        content     TEXT NOT NULL,
        thread_id   INTEGER NOT NULL REFERENCES threads (id),
        created_at  TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_threads_title ON threads (title)",
    "CREATE INDEX IF NOT EXISTS idx_posts_thread_id ON posts (thread_id)",
];

/// Create the tables and indexes if they do not exist yet.
///
/// Safe to call on every start.
#[instrument(skip(pool))]
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    debug!(statements = STATEMENTS.len(), "Schema ready");
    Ok(())
}
