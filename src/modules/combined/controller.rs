use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use validator::Validate;

use crate::modules::combined::schema::CombinedResponse;
use crate::modules::text::schema::{ErrorResponse, ProcessTextRequest, TextResponse};
use crate::modules::validation_message;
use crate::modules::youtube::controller::to_recommendation;
use crate::AppState;

/// Number of recommendations attached to a combined response.
const COMBINED_RESULTS: usize = 5;

/// Runs the text provider, then the video provider with the input text as
/// the query. The first failure short-circuits; the video step never runs
/// when the text step fails.
pub async fn combined_response(
    State(state): State<AppState>,
    Json(payload): Json<ProcessTextRequest>,
) -> Result<Json<CombinedResponse>, (StatusCode, Json<ErrorResponse>)> {
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

    let text_response = TextResponse {
        response,
        timestamp: Utc::now().to_rfc3339(),
    };

    let videos = state
        .video_provider
        .recommendations(&payload.text, COMBINED_RESULTS)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("YouTube recommendations failed: {}", e),
                }),
            )
        })?;

    Ok(Json(CombinedResponse {
        text_response,
        youtube_recommendations: videos.into_iter().map(to_recommendation).collect(),
    }))
}
