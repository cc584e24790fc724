use crate::config::settings::AppConfig;
use crate::services::llm::TextProvider;
use crate::services::youtube::VideoProvider;

pub mod config;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub text_provider: TextProvider,
    pub video_provider: VideoProvider,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let text_provider = TextProvider::from_config(&config);
        let video_provider = VideoProvider::from_config(&config);

        Self {
            config,
            text_provider,
            video_provider,
        }
    }
}
