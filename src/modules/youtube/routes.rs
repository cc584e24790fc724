use axum::{routing::post, Router};

use crate::modules::youtube::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/youtube-recommendations",
        post(controller::recommendations),
    )
}
