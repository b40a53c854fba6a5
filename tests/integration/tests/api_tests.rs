//! API Integration Tests
//!
//! Each test starts its own server over a private in-memory SQLite store;
//! nothing external is required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_thread(server: &TestServer, request: &CreateThreadRequest) -> ThreadResponse {
    let response = server.post("/api/threads", request).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn create_post(server: &TestServer, thread_id: i64, content: &str) -> PostResponse {
    let response = server
        .post(
            &format!("/api/threads/{thread_id}/posts"),
            &CreatePostRequest::new(content),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Thread Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_thread() {
    let server = TestServer::start().await.unwrap();
    let request = CreateThreadRequest::new("Test Thread", "This is a test thread content");

    let created = create_thread(&server, &request).await;
    assert!(created.id > 0);
    assert_eq!(created.title, "Test Thread");
    assert_eq!(created.content, "This is a test thread content");
    assert!(created.posts.is_empty());

    let response = server.get(&format!("/api/threads/{}", created.id)).await.unwrap();
    let fetched: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_threads_contains_created() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/threads").await.unwrap();
    let empty: Vec<ThreadResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(empty.is_empty());

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(create_thread(&server, &CreateThreadRequest::unique()).await.id);
    }

    let response = server.get("/api/threads").await.unwrap();
    let threads: Vec<ThreadResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let listed: Vec<i64> = threads.iter().map(|t| t.id).collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_get_missing_thread() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/threads/999").await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body, json!({"detail": "Thread not found"}));
}

#[tokio::test]
async fn test_non_integer_thread_id_is_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/threads/abc").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert!(!body.detail.is_empty());

    let response = server.get("/api/threads/abc/posts").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
}

#[tokio::test]
async fn test_create_thread_empty_title() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/threads", &CreateThreadRequest::new("", "content"))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    let errors = body.errors.expect("field errors");
    assert!(errors.get("title").is_some());

    // Nothing was stored
    let response = server.get("/api/threads").await.unwrap();
    let threads: Vec<ThreadResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(threads.is_empty());
}

#[tokio::test]
async fn test_create_thread_malformed_body() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("/api/threads", "{not json").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    let response = server
        .post_raw("/api/threads", r#"{"title":"missing content"}"#)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    let response = server
        .post_raw("/api/threads", r#"{"title":42,"content":"wrong type"}"#)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
}

#[tokio::test]
async fn test_client_cannot_choose_server_fields() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/api/threads",
            &json!({
                "id": 4242,
                "title": "Sneaky",
                "content": "picks its own id",
                "created_at": "2000-01-01T00:00:00Z"
            }),
        )
        .await
        .unwrap();
    let created: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_ne!(created.id, 4242);
    assert!(created.created_at.timestamp() > 946_684_800);
}

#[tokio::test]
async fn test_server_fields_are_stable() {
    let server = TestServer::start().await.unwrap();
    let created = create_thread(&server, &CreateThreadRequest::unique()).await;
    let path = format!("/api/threads/{}", created.id);

    let first: ThreadResponse = assert_json(server.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let second: ThreadResponse = assert_json(server.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);
    assert_eq!(first.created_at, created.created_at);
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_post_and_list() {
    let server = TestServer::start().await.unwrap();
    let thread = create_thread(&server, &CreateThreadRequest::unique()).await;

    let post = create_post(&server, thread.id, "a reply").await;
    assert_eq!(post.thread_id, thread.id);
    assert_eq!(post.content, "a reply");

    let response = server
        .get(&format!("/api/threads/{}/posts", thread.id))
        .await
        .unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(posts, vec![post]);
}

#[tokio::test]
async fn test_post_does_not_embed_thread() {
    let server = TestServer::start().await.unwrap();
    let thread = create_thread(&server, &CreateThreadRequest::unique()).await;

    let response = server
        .post(
            &format!("/api/threads/{}/posts", thread.id),
            &CreatePostRequest::new("flat"),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let mut keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["content", "created_at", "id", "thread_id"]);
}

#[tokio::test]
async fn test_post_to_missing_thread() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/threads/999/posts", &CreatePostRequest::new("orphan"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body, json!({"detail": "Thread not found"}));

    let response = server.get("/api/threads/999/posts").await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body, json!({"detail": "Thread not found"}));
}

#[tokio::test]
async fn test_create_post_empty_content() {
    let server = TestServer::start().await.unwrap();
    let thread = create_thread(&server, &CreateThreadRequest::unique()).await;

    let response = server
        .post(
            &format!("/api/threads/{}/posts", thread.id),
            &CreatePostRequest::new(""),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    let response = server
        .get(&format!("/api/threads/{}/posts", thread.id))
        .await
        .unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_posts_are_scoped_and_ordered() {
    let server = TestServer::start().await.unwrap();
    let first = create_thread(&server, &CreateThreadRequest::unique()).await;
    let second = create_thread(&server, &CreateThreadRequest::unique()).await;

    let a = create_post(&server, first.id, "first-a").await;
    create_post(&server, second.id, "second-a").await;
    let b = create_post(&server, first.id, "first-b").await;

    let response = server.get(&format!("/api/threads/{}", first.id)).await.unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(thread.posts, vec![a, b]);

    let response = server.get("/api/threads").await.unwrap();
    let threads: Vec<ThreadResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(threads.len(), 2);
    assert_eq!(threads[1].posts.len(), 1);
    assert_eq!(threads[1].posts[0].content, "second-a");
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[tokio::test]
async fn test_thread_with_reply_scenario() {
    let server = TestServer::start().await.unwrap();

    let thread = create_thread(
        &server,
        &CreateThreadRequest::new("Test Thread", "This is a test thread content"),
    )
    .await;

    let post = create_post(&server, thread.id, "This is a test post").await;
    assert_eq!(post.content, "This is a test post");
    assert_eq!(post.thread_id, thread.id);

    let response = server
        .get(&format!("/api/threads/{}/posts", thread.id))
        .await
        .unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].content, "This is a test post");

    let response = server.get(&format!("/api/threads/{}", thread.id)).await.unwrap();
    let fetched: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.title, "Test Thread");
    assert_eq!(fetched.posts, posts);
}

// ============================================================================
// CORS Tests
// ============================================================================

#[tokio::test]
async fn test_cors_allows_frontend_origin() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .client
        .get(format!("{}/api/threads", server.base_url()))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(response.headers()["access-control-allow-credentials"], "true");
}
