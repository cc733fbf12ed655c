mod config;
mod failure;
mod gemini;
mod models;
mod options;
mod prompt;
mod routes;
mod validation;
mod workflow;

use axum::{Router, routing::{post, get}};
use routes::{generate, get_workflow, list_images, get_image, download_image, clear_demo_mode, get_options, inspire, default_parameters, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};
use std::sync::Arc;
use tower_http::cors::{CorsLayer, Any};

use crate::config::AppConfig;
use crate::gemini::GeminiClient;
use crate::workflow::{Pacing, Workflow};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate))
        .route("/api/workflow", get(get_workflow))
        .route("/api/images", get(list_images))
        .route("/api/images/:view", get(get_image))
        .route("/api/images/:view/download", get(download_image))
        .route("/api/demo-mode/clear", post(clear_demo_mode))
        .route("/api/options", get(get_options))
        .route("/api/inspire/:target", get(inspire))
        .route("/api/parameters/default", get(default_parameters))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();
    tracing::info!("Using API key: {} (model {})", config.masked_api_key(), config.model);

    let gemini = GeminiClient::new(
        config.api_key.clone().unwrap_or_default(),
        config.api_base.clone(),
        config.model.clone(),
    );
    let workflow = Arc::new(Workflow::new(Arc::new(gemini), Pacing::new(config.phase_delay_scale)));
    if config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set, starting in demo mode");
        workflow.fallback().engage();
    }

    let app = router(AppState { workflow });

    let addr = SocketAddr::from(([0,0,0,0], config.port));
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
