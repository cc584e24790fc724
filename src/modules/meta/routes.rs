use axum::{routing::get, Router};

use crate::modules::meta::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(controller::root))
        .route("/health", get(controller::health))
        .route("/api/service-info", get(controller::service_info))
}
