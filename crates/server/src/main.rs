//! HTTP surface for the Harmonic Gambit replay study.
//!
//! Serves the game record, the per-ply position encodings, the authored
//! chart datasets, and the bilingual heading table as JSON.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    // Replay the corrected sequence once; a fault here means the embedded
    // record is broken and there is nothing sensible to serve.
    tracing::info!("Replaying game record...");
    let state = Arc::new(AppState::build().expect("Failed to replay embedded game record"));
    tracing::info!(
        plies = state.record.moves.len(),
        positions = state.positions.len(),
        "Game record ready"
    );

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Game record and positions
        .route("/api/game", get(routes::game::get_game))
        .route("/api/game/positions", get(routes::game::get_positions))
        .route("/api/game/positions/{ply}", get(routes::game::get_position_at))
        // Chart datasets
        .route("/api/datasets", get(routes::datasets::get_datasets))
        // Heading translations
        .route("/api/i18n/{lang}", get(routes::i18n::get_translations))
        // Shared state
        .layer(Extension(state))
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting replay server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
