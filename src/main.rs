use axum::Router;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use ai_template_api::config::settings::AppConfig;
use ai_template_api::{modules, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    let port = config.port;
    let state = AppState::new(config);

    tracing::info!(
        openai_configured = state.text_provider.is_real(),
        youtube_configured = state.video_provider.is_real(),
        "starting AI Integration Template API"
    );

    let app = Router::new()
        .merge(modules::meta::routes::routes())
        .merge(modules::text::routes::routes())
        .merge(modules::youtube::routes::routes())
        .merge(modules::combined::routes::routes())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
