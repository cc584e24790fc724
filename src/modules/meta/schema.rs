use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub text_processing: String,
    pub youtube_recommendations: String,
    pub health: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub ai_service: AiServiceInfo,
    pub youtube_service: YouTubeServiceInfo,
}

#[derive(Debug, Serialize)]
pub struct AiServiceInfo {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub api_configured: bool,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct YouTubeServiceInfo {
    pub configured: bool,
}
