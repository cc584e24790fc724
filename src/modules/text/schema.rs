use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ProcessTextRequest {
    #[serde(default)]
    #[validate(custom(function = crate::modules::not_blank, message = "Text is required"))]
    pub text: String,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub response: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
