use axum::{routing::post, Router};

use crate::modules::combined::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/combined-response", post(controller::combined_response))
}
