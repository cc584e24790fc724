use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use serde_json::json;

use ai_template_api::config::settings::AppConfig;
use ai_template_api::{modules, AppState};

fn setup_test_server() -> TestServer {
    // Default config carries no API keys, so both providers run in mock mode.
    let state = AppState::new(AppConfig::default());

    let app = Router::new()
        .merge(modules::text::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_process_text_empty_fails() {
    let server = setup_test_server();

    let response = server
        .post("/api/process-text")
        .json(&json!({ "text": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Text is required");
}

#[tokio::test]
async fn test_process_text_whitespace_fails() {
    let server = setup_test_server();

    let response = server
        .post("/api/process-text")
        .json(&json!({ "text": "   \t " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Text is required");
}

#[tokio::test]
async fn test_process_text_missing_field_fails() {
    let server = setup_test_server();

    let response = server
        .post("/api/process-text")
        .json(&json!({ "context": "no text here" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Text is required");
}

#[tokio::test]
async fn test_process_text_mock_response() {
    let server = setup_test_server();

    let response = server
        .post("/api/process-text")
        .json(&json!({ "text": "Hello" }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["response"],
        "This is a mock AI response to your input: 'Hello...'. \
         To enable real AI responses, please set your OPENAI_API_KEY environment variable. \
         Context provided: None"
    );
}

#[tokio::test]
async fn test_process_text_timestamp_is_rfc3339() {
    let server = setup_test_server();

    let response = server
        .post("/api/process-text")
        .json(&json!({ "text": "What is calculus?" }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_process_text_includes_context() {
    let server = setup_test_server();

    let response = server
        .post("/api/process-text")
        .json(&json!({ "text": "Hello", "context": "study tips" }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let text = body["response"].as_str().unwrap();
    assert!(text.ends_with("Context provided: study tips"));
}

#[tokio::test]
async fn test_process_text_truncates_long_input() {
    let server = setup_test_server();

    let long_input = "a".repeat(150);
    let response = server
        .post("/api/process-text")
        .json(&json!({ "text": long_input }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let text = body["response"].as_str().unwrap();
    assert!(text.contains(&format!("'{}...'", "a".repeat(100))));
    assert!(!text.contains(&"a".repeat(101)));
}
