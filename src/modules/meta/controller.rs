use axum::{extract::State, Json};

use crate::modules::meta::schema::{
    AiServiceInfo, ApiInfo, Endpoints, HealthResponse, ServiceInfo, YouTubeServiceInfo,
};
use crate::AppState;

pub const SERVICE_NAME: &str = "AI Integration Template API";

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            text_processing: "/api/process-text".to_string(),
            youtube_recommendations: "/api/youtube-recommendations".to_string(),
            health: "/health".to_string(),
        },
    })
}

pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        ai_service: AiServiceInfo {
            model: state.config.ai_model.clone(),
            max_tokens: state.config.max_tokens,
            temperature: state.config.temperature,
            api_configured: state.text_provider.is_real(),
            service: "OpenAI GPT".to_string(),
        },
        youtube_service: YouTubeServiceInfo {
            configured: state.video_provider.is_real(),
        },
    })
}
