//! Draughts room server.
//!
//! A minimal axum-based web server exposing:
//! - REST endpoints to create, join, and play multiplayer rooms
//! - a stateless human-vs-machine move endpoint
//! - static files for the browser client

mod api;
mod config;
mod error;
mod models;
mod rooms;

use axum::routing::{get, post};
use axum::Router;
use config::{ConfigError, ServerConfig};
use rooms::RoomStore;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// All live rooms behind one lock; move validation and application
    /// are atomic per room.
    pub rooms: RoomStore,
}

/// Health check endpoint.
///
/// Returns "ok" to indicate the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Builds the application router.
fn app(state: AppState, static_dir: &Path) -> Router {
    // CORS layer for cross-origin requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/create_room", post(api::rooms::create_room))
        .route("/api/join_room", post(api::rooms::join_room))
        .route("/api/game_state", post(api::rooms::game_state))
        .route("/api/move_multiplayer", post(api::moves::move_multiplayer))
        .route("/api/new_game", post(api::moves::new_game))
        .route("/api/move", post(api::moves::move_vs_ai))
        .with_state(state)
        .layer(cors)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(ConfigError::Read(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            ServerConfig::default()
        }
        Err(err) => {
            tracing::warn!("using default config: {}", err);
            ServerConfig::default()
        }
    };

    let state = AppState {
        rooms: rooms::new_store(),
    };
    let app = app(state, &config.static_dir);

    let addr = config.addr();
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    axum::serve(listener, app).await.expect("Server error");
}
