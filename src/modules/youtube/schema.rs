use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[serde(default)]
    #[validate(custom(function = crate::modules::not_blank, message = "Query is required"))]
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    10
}

#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub video_id: String,
    pub thumbnail_url: String,
    pub channel_name: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
