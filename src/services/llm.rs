use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::settings::AppConfig;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl LlmClient {
    pub fn new(api_key: String, model: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            max_tokens,
            temperature,
        }
    }

    /// Sends the input as a user message, with the optional context as a
    /// system message, and returns the first choice's content.
    pub async fn chat(&self, text: &str, context: Option<&str>) -> Result<String, LlmError> {
        let mut messages = Vec::new();

        if let Some(ctx) = context {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: ctx.to_string(),
            });
        }

        messages.push(ChatMessage {
            role: "user".to_string(),
            content: text.to_string(),
        });

        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", OPENAI_BASE_URL))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(LlmError::ApiError(error_response.error.message));
            }
            return Err(LlmError::ApiError(error_text));
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))
    }
}

/// Text responder: a real OpenAI-backed client when a key is configured,
/// otherwise a deterministic mock. Selected once at startup.
#[derive(Clone)]
pub enum TextProvider {
    Real(LlmClient),
    Mock,
}

impl TextProvider {
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.openai_api_key {
            Some(key) => TextProvider::Real(LlmClient::new(
                key.clone(),
                config.ai_model.clone(),
                config.max_tokens,
                config.temperature,
            )),
            None => {
                tracing::info!("OPENAI_API_KEY not set, using mock text responses");
                TextProvider::Mock
            }
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, TextProvider::Real(_))
    }

    pub async fn process(&self, text: &str, context: Option<&str>) -> Result<String, LlmError> {
        match self {
            TextProvider::Real(client) => client.chat(text, context).await,
            TextProvider::Mock => Ok(mock_response(text, context)),
        }
    }
}

fn mock_response(text: &str, context: Option<&str>) -> String {
    // First 100 characters, not bytes, so multi-byte input stays intact.
    let preview: String = text.chars().take(100).collect();

    format!(
        "This is a mock AI response to your input: '{}...'. \
         To enable real AI responses, please set your OPENAI_API_KEY environment variable. \
         Context provided: {}",
        preview,
        context.unwrap_or("None")
    )
}
