//! HTTP workflow tests against the full router.
//!
//! The Anthropic Messages API is stood in for by a wiremock server, so
//! these tests exercise the real chat pipeline end to end: validation,
//! crisis detection, completion, and persistence.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mindhaven::anthropic::{AnthropicClient, ClientConfig};
use mindhaven::server::{router, AppState};
use mindhaven::storage::SqliteStorage;
use mindhaven::traits::Storage;

// ============================================================================
// Test Utilities
// ============================================================================

async fn state_with_mock(server: &MockServer) -> AppState {
    state_with_mock_and_limit(server, 100).await
}

async fn state_with_mock_and_limit(server: &MockServer, max_requests: u32) -> AppState {
    let storage = Arc::new(
        SqliteStorage::new_in_memory()
            .await
            .expect("Failed to create storage"),
    );
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_max_retries(0)
        .with_timeout_ms(5_000);
    let client =
        Arc::new(AnthropicClient::new("test-api-key", config).expect("Failed to create client"));
    AppState::new(storage, client, max_requests, Duration::from_secs(60))
}

fn completion_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_123",
        "content": [{"type": "text", "text": text}],
        "model": "claude-3",
        "usage": {"input_tokens": 10, "output_tokens": 20},
        "stop_reason": "end_turn"
    })
}

async fn mock_completion(server: &MockServer, reply: &str) {
    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(reply)))
        .mount(server)
        .await;
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 65536)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Body was not JSON")
}

// ============================================================================
// Chat Workflow Tests
// ============================================================================

#[tokio::test]
async fn chat_turn_returns_reply_and_crisis_header() {
    let server = MockServer::start().await;
    mock_completion(&server, "You are heard.").await;

    let app = router(state_with_mock(&server).await);

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message":"I had a rough week"}"#))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-crisis-detected").expect("header"),
        "false"
    );

    let json = response_json(response).await;
    assert_eq!(json["reply"], "You are heard.");
    assert_eq!(json["has_crisis_content"], false);
    assert!(!json["session_id"].as_str().expect("string").is_empty());
}

#[tokio::test]
async fn chat_turn_persists_both_sides() {
    let server = MockServer::start().await;
    mock_completion(&server, "Glad you reached out.").await;

    let state = state_with_mock(&server).await;
    let app = router(state.clone());

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message":"Feeling anxious today"}"#))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    let session_id = json["session_id"].as_str().expect("string");

    let messages = state
        .storage
        .get_messages(session_id)
        .await
        .expect("Failed to get messages");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "user");
    assert_eq!(messages[0].content, "Feeling anxious today");
    assert_eq!(messages[1].role, "assistant");
    assert_eq!(messages[1].content, "Glad you reached out.");
}

#[tokio::test]
async fn crisis_message_flags_response_and_prompt() {
    let server = MockServer::start().await;
    mock_completion(&server, "Please reach out to the 988 lifeline.").await;

    let state = state_with_mock(&server).await;
    let app = router(state.clone());

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message":"I feel hopeless"}"#))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-crisis-detected").expect("header"),
        "true"
    );

    let json = response_json(response).await;
    assert_eq!(json["has_crisis_content"], true);

    // The crisis addendum must reach the model
    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("request body was not JSON");
    let system = body["system"].as_str().expect("system prompt");
    assert!(system.contains("988"));

    // The user message is stored with the crisis flag
    let session_id = json["session_id"].as_str().expect("string");
    let messages = state
        .storage
        .get_messages(session_id)
        .await
        .expect("Failed to get messages");
    assert!(messages[0].has_crisis_content);
    assert!(!messages[1].has_crisis_content);
}

#[tokio::test]
async fn followup_turn_sends_conversation_history() {
    let server = MockServer::start().await;
    mock_completion(&server, "Tell me more.").await;

    let app = router(state_with_mock(&server).await);

    let response = app
        .clone()
        .oneshot(post_json("/api/chat", r#"{"message":"Classes are overwhelming"}"#))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let first = response_json(response).await;
    let session_id = first["session_id"].as_str().expect("string");

    let followup = format!(r#"{{"session_id":"{session_id}","message":"Mostly the workload"}}"#);
    let response = app
        .oneshot(post_json("/api/chat", &followup))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 2);
    let body: serde_json::Value =
        serde_json::from_slice(&requests[1].body).expect("request body was not JSON");
    let messages = body["messages"].as_array().expect("messages array");
    // Prior user + assistant turns, then the new user message
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2]["content"], "Mostly the workload");
}

#[tokio::test]
async fn completion_failure_maps_to_502() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = router(state_with_mock(&server).await);

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message":"Hello"}"#))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = response_json(response).await;
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn invalid_message_never_reaches_the_model() {
    let server = MockServer::start().await;
    mock_completion(&server, "unused").await;

    let app = router(state_with_mock(&server).await);

    let response = app
        .oneshot(post_json("/api/chat", r#"{"message":""}"#))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let requests = server.received_requests().await.expect("requests");
    assert!(requests.is_empty());
}

// ============================================================================
// Assessment Workflow Tests
// ============================================================================

#[tokio::test]
async fn scoring_workflow_persists_record() {
    let server = MockServer::start().await;
    let state = state_with_mock(&server).await;
    let app = router(state.clone());

    let response = app
        .oneshot(post_json(
            "/api/assessments/phq-9/score",
            r#"{"answers":[3,3,3,3,3,3,3,3,3]}"#,
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["total"], 27);
    assert_eq!(json["severity"], "severe");

    let records = state
        .storage
        .fetch_assessments()
        .await
        .expect("Failed to list assessments");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, "severe");
    assert_eq!(records[0].answers.len(), 9);
}

// ============================================================================
// Wellness Workflow Tests
// ============================================================================

#[tokio::test]
async fn wellness_workflow_over_http() {
    let server = MockServer::start().await;
    let app = router(state_with_mock(&server).await);

    let response = app
        .clone()
        .oneshot(post_json("/api/mood", r#"{"rating":8,"note":"good day"}"#))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/journal",
            r#"{"content":"Campus walk helped clear my head."}"#,
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/appointments",
            r#"{"counselor_name":"Dr. Chen","scheduled_at":"2026-10-02T09:30:00Z"}"#,
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    for uri in ["/api/mood", "/api/journal", "/api/appointments"] {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        let response = app.clone().oneshot(request).await.expect("Request failed");
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json.as_array().expect("array").len(), 1, "{uri}");
    }
}

// ============================================================================
// Rate Limiting Tests
// ============================================================================

#[tokio::test]
async fn rate_limit_spans_all_api_endpoints() {
    let server = MockServer::start().await;
    let app = router(state_with_mock_and_limit(&server, 3).await);

    for uri in ["/api/resources", "/api/assessments", "/api/mood"] {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        let response = app.clone().oneshot(request).await.expect("Request failed");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let request = Request::builder()
        .method("GET")
        .uri("/api/resources")
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app.oneshot(request).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("Retry-After"));
}
