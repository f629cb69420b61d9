use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod handlers;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;

pub fn create_app(state: AppState, root_path: &str) -> Router {
    let api = Router::new()
        .route("/api/generate", post(handlers::generate))
        .route("/api/models", get(handlers::list_models))
        .route("/health", get(handlers::health))
        .with_state(Arc::new(state));

    let app = match config::normalize_root_path(root_path) {
        Some(prefix) => Router::new().nest(&prefix, api),
        None => api,
    };

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Binds `0.0.0.0:{port}` and serves until the process is stopped.
pub async fn serve(config: ServerConfig, state: AppState) -> seo_core::Result<()> {
    let app = create_app(state, &config.root_path);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        "🚀 Listening on http://{}{}",
        addr,
        config::normalize_root_path(&config.root_path).unwrap_or_default()
    );
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use seo_core::{ArticleRequest, GeneratedArticle, Result, Error};
    pub use crate::{AppState, ServerConfig};
}
