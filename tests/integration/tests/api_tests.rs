//! API Integration Tests
//!
//! These tests spawn the real Axum application over an in-memory SQLite
//! store with recording stubs for the completion backend and the
//! Telegram Bot API. No external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;
use std::time::Duration;

use integration_tests::{
    assert_json, assert_status, fixtures::*, wait_for, TestServer, TEST_PUBLIC_BASE_URL,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_index_banner() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Roster Tests
// ============================================================================

#[tokio::test]
async fn test_add_user_returns_created() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_form("/add_user", &[("username", "alice")])
        .await
        .unwrap();
    let user: UserBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.name, "alice");
}

#[tokio::test]
async fn test_add_user_requires_username() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_form("/add_user", &[("username", "")])
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_duplicate_add_conflicts() {
    let server = TestServer::start().await.unwrap();

    server
        .post_form("/add_user", &[("username", "alice")])
        .await
        .unwrap();

    let response = server
        .post_form("/add_user", &[("username", "alice")])
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "USER_ALREADY_EXISTS");

    // The roster is unchanged
    let response = server.get("/main").await.unwrap();
    let users: Vec<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_delete_missing_user_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_form("/delete_user", &[("username", "ghost")])
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_roster_crud_and_audit_flow() {
    let server = TestServer::start().await.unwrap();

    // add "alice" -> created
    let response = server
        .post_form("/add_user", &[("username", "alice")])
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // add "alice" again -> conflict, roster size stays 1
    let response = server
        .post_form("/add_user", &[("username", "alice")])
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // delete "alice" -> one row removed
    let response = server
        .post_form("/delete_user", &[("username", "alice")])
        .await
        .unwrap();
    let outcome: DeleteBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.deleted, 1);

    // roster is empty again
    let response = server.get("/main").await.unwrap();
    let users: Vec<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.is_empty());

    // audit log holds both mutations, newest first
    let response = server.get("/logs").await.unwrap();
    let entries: Vec<AuditEntryBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action, "DELETE");
    assert_eq!(entries[0].username, "alice");
    assert_eq!(entries[1].action, "ADD");
    assert_eq!(entries[1].username, "alice");
    for pair in entries.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

// ============================================================================
// Completion Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_llama_reply_uses_fixed_model() {
    let server = TestServer::start_with(
        Arc::new(RecordingCompletion::replying("the answer")),
        Arc::new(RecordingTelegram::default()),
    )
    .await
    .unwrap();

    let response = server
        .post_form("/llama_reply", &[("q", "what is this")])
        .await
        .unwrap();
    let reply: ReplyBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(reply.model, "llama-3.1-8b-instant");
    assert_eq!(reply.reply, "the answer");
    assert_eq!(server.completion.calls(), 1);
}

#[tokio::test]
async fn test_deepseek_reply_uses_fixed_model() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_form("/deepseek_reply", &[("q", "hi")])
        .await
        .unwrap();
    let reply: ReplyBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(reply.model, "deepseek-r1-distill-llama-70b");
}

#[tokio::test]
async fn test_reply_requires_prompt() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_form("/llama_reply", &[("q", "")]).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert_eq!(server.completion.calls(), 0);
}

#[tokio::test]
async fn test_backend_failure_is_bad_gateway() {
    let server = TestServer::start_with(
        Arc::new(RecordingCompletion::failing()),
        Arc::new(RecordingTelegram::default()),
    )
    .await
    .unwrap();

    let response = server.post_form("/llama_reply", &[("q", "hi")]).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_GATEWAY).await.unwrap();
    assert_eq!(body.error.code, "COMPLETION_ERROR");
}

// ============================================================================
// Webhook Control Tests
// ============================================================================

#[tokio::test]
async fn test_register_webhook() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/telegram").await.unwrap();
    let status: WebhookStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(status.state, "registered");
    // The stale registration was deleted before the new URL was set.
    assert_eq!(server.telegram.delete_webhook_calls(), 1);
    assert_eq!(
        server.telegram.set_webhook_calls(),
        vec![format!("{TEST_PUBLIC_BASE_URL}/webhook")]
    );
}

#[tokio::test]
async fn test_register_webhook_set_failure() {
    let server = TestServer::start_with(
        Arc::new(RecordingCompletion::replying("hello")),
        Arc::new(RecordingTelegram::failing_set(404)),
    )
    .await
    .unwrap();

    let response = server.post_json("/telegram", &json!({})).await.unwrap();
    let status: WebhookStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(status.state, "unregistered");
    assert!(status.detail.contains("Failed"));
}

#[tokio::test]
async fn test_unregister_webhook() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/stop_telegram").await.unwrap();
    let status: WebhookStatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(status.state, "unregistered");
    assert_eq!(server.telegram.delete_webhook_calls(), 1);
    assert!(server.telegram.set_webhook_calls().is_empty());
}

// ============================================================================
// Inbound Relay Tests
// ============================================================================

#[tokio::test]
async fn test_webhook_message_is_relayed_exactly_once() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_json(
            "/webhook",
            &json!({"message": {"chat": {"id": 42}, "text": "hi"}}),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");

    // The reply is delivered out-of-band after the acknowledgment.
    let telegram = server.telegram.clone();
    assert!(
        wait_for(
            || !telegram.sent_messages().is_empty(),
            Duration::from_secs(2)
        )
        .await
    );
    assert_eq!(
        server.telegram.sent_messages(),
        vec![(42, "hello".to_string())]
    );
    assert_eq!(server.completion.calls(), 1);
}

#[tokio::test]
async fn test_webhook_without_message_is_acknowledged_silently() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_json("/webhook", &json!({})).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
    assert_eq!(server.completion.calls(), 0);
    assert!(server.telegram.sent_messages().is_empty());
}

#[tokio::test]
async fn test_webhook_with_empty_text_is_acknowledged_silently() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_json("/webhook", &json!({"message": {"chat": {"id": 42}}}))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(server.completion.calls(), 0);
}

#[tokio::test]
async fn test_webhook_with_garbage_body_is_acknowledged() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("/webhook", "not json at all").await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
    assert_eq!(server.completion.calls(), 0);
}

#[tokio::test]
async fn test_webhook_completion_failure_sends_fallback() {
    let server = TestServer::start_with(
        Arc::new(RecordingCompletion::failing()),
        Arc::new(RecordingTelegram::default()),
    )
    .await
    .unwrap();

    let response = server
        .post_json(
            "/webhook",
            &json!({"message": {"chat": {"id": 7}, "text": "hi"}}),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let telegram = server.telegram.clone();
    assert!(
        wait_for(
            || !telegram.sent_messages().is_empty(),
            Duration::from_secs(2)
        )
        .await
    );
    assert_eq!(
        server.telegram.sent_messages(),
        vec![(7, "could not process your message".to_string())]
    );
}
