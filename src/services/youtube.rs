use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::settings::AppConfig;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Upper bound on requested results, matching the YouTube API's own
/// per-page maximum.
pub const MAX_RESULTS_LIMIT: usize = 50;

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Debug, Clone)]
pub struct Video {
    pub title: String,
    pub video_id: String,
    pub thumbnail_url: String,
    pub channel_name: String,
    pub url: String,
}

#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Video>, YouTubeError> {
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("safeSearch", "moderate"),
                ("q", query),
                ("maxResults", &max_results.to_string()),
                ("key", &self.api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(YouTubeError::ApiError(error_response.error.message));
            }
            return Err(YouTubeError::ApiError(error_text));
        }

        let search_response: SearchResponse = response.json().await?;

        let videos = search_response
            .items
            .into_iter()
            .map(|item| {
                let thumbnail = item
                    .snippet
                    .thumbnails
                    .medium
                    .or(item.snippet.thumbnails.default)
                    .map(|t| t.url)
                    .unwrap_or_default();

                Video {
                    title: item.snippet.title,
                    url: format!("https://www.youtube.com/watch?v={}", item.id.video_id),
                    video_id: item.id.video_id,
                    thumbnail_url: thumbnail,
                    channel_name: item.snippet.channel_title,
                }
            })
            .collect();

        Ok(videos)
    }
}

/// Video responder: a real YouTube Data API client when a key is configured,
/// otherwise a deterministic mock. Selected once at startup.
#[derive(Clone)]
pub enum VideoProvider {
    Real(YouTubeClient),
    Mock,
}

impl VideoProvider {
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.youtube_api_key {
            Some(key) => VideoProvider::Real(YouTubeClient::new(key.clone())),
            None => {
                tracing::info!("YOUTUBE_API_KEY not set, using mock video recommendations");
                VideoProvider::Mock
            }
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, VideoProvider::Real(_))
    }

    pub async fn recommendations(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Video>, YouTubeError> {
        let count = max_results.min(MAX_RESULTS_LIMIT);

        match self {
            VideoProvider::Real(client) => client.search(query, count).await,
            VideoProvider::Mock => Ok(mock_videos(query, count)),
        }
    }
}

fn mock_videos(query: &str, count: usize) -> Vec<Video> {
    (1..=count)
        .map(|i| Video {
            title: format!("Mock result {} for '{}'", i, query),
            video_id: format!("mock-video-{}", i),
            thumbnail_url: "https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg".to_string(),
            channel_name: "Mock Channel".to_string(),
            url: format!("https://www.youtube.com/watch?v=mock-video-{}", i),
        })
        .collect()
}
