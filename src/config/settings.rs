use std::env;

/// Runtime configuration, read once at startup and passed into `AppState`.
/// Missing or empty API keys switch the matching provider to mock mode;
/// none of these values change response shapes, only the data source.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub youtube_api_key: Option<String>,
    pub ai_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            youtube_api_key: non_empty_var("YOUTUBE_API_KEY"),
            ai_model: env::var("AI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            max_tokens: env::var("MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            temperature: env::var("AI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.7),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            youtube_api_key: None,
            ai_model: "gpt-3.5-turbo".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            port: 8000,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
