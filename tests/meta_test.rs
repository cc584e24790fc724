use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;

use ai_template_api::config::settings::AppConfig;
use ai_template_api::{modules, AppState};

fn setup_test_server() -> TestServer {
    let state = AppState::new(AppConfig::default());

    let app = Router::new()
        .merge(modules::meta::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = setup_test_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "AI Integration Template API");
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let server = setup_test_server();

    let response = server.get("/").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "AI Integration Template API");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["endpoints"]["text_processing"], "/api/process-text");
    assert_eq!(
        body["endpoints"]["youtube_recommendations"],
        "/api/youtube-recommendations"
    );
    assert_eq!(body["endpoints"]["health"], "/health");
}

#[tokio::test]
async fn test_service_info_without_keys() {
    let server = setup_test_server();

    let response = server.get("/api/service-info").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["ai_service"]["model"], "gpt-3.5-turbo");
    assert_eq!(body["ai_service"]["max_tokens"], 1000);
    assert_eq!(body["ai_service"]["api_configured"], false);
    assert_eq!(body["youtube_service"]["configured"], false);
}
