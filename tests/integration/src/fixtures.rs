//! Test fixtures and data generators
//!
//! Client-side mirrors of the request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create thread request
#[derive(Debug, Serialize)]
pub struct CreateThreadRequest {
    pub title: String,
    pub content: String,
}

impl CreateThreadRequest {
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Thread {suffix}"),
            content: format!("Opening post {suffix}"),
        }
    }
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub content: String,
}

impl CreatePostRequest {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

/// Thread response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThreadResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub posts: Vec<PostResponse>,
}

/// Post response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub content: String,
    pub thread_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}
