use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::modules::validation_message;
use crate::modules::youtube::schema::{ErrorResponse, Recommendation, RecommendationsRequest};
use crate::services::youtube::Video;
use crate::AppState;

pub(crate) fn to_recommendation(v: Video) -> Recommendation {
    Recommendation {
        title: v.title,
        video_id: v.video_id,
        thumbnail_url: v.thumbnail_url,
        channel_name: v.channel_name,
        url: v.url,
    }
}

pub async fn recommendations(
    State(state): State<AppState>,
    Json(payload): Json<RecommendationsRequest>,
) -> Result<Json<Vec<Recommendation>>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: validation_message(&e) }),
        ));
    }

    let videos = state
        .video_provider
        .recommendations(&payload.query, payload.max_results)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("YouTube recommendations failed: {}", e),
                }),
            )
        })?;

    Ok(Json(videos.into_iter().map(to_recommendation).collect()))
}
