use axum::{routing::post, Router};

use crate::modules::text::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/process-text", post(controller::process_text))
}
