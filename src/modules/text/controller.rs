use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use validator::Validate;

use crate::modules::text::schema::{ErrorResponse, ProcessTextRequest, TextResponse};
use crate::modules::validation_message;
use crate::AppState;

pub async fn process_text(
    State(state): State<AppState>,
    Json(payload): Json<ProcessTextRequest>,
) -> Result<Json<TextResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: validation_message(&e) }),
        ));
    }

    let response = state
        .text_provider
        .process(&payload.text, payload.context.as_deref())
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: format!("Text processing failed: {}", e) }),
            )
        })?;

    Ok(Json(TextResponse {
        response,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
