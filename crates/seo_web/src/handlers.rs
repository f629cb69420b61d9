use axum::{
    extract::State,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use seo_core::{ArticleRequest, GeneratedArticle};
use seo_inference::{DEFAULT_MODEL, SUPPORTED_MODELS};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ModelList {
    pub models: Vec<&'static str>,
    pub default: &'static str,
}

/// Always answers 200: failures come back as an error document.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(mut request): Json<ArticleRequest>,
) -> Json<GeneratedArticle> {
    if request.api_key.as_deref().map_or(true, |key| key.trim().is_empty()) {
        request.api_key = state.default_api_key.clone();
    }
    tracing::info!("📝 Generate request: {:?}", request);

    Json(state.composer.compose(&request).await)
}

pub async fn list_models() -> Json<ModelList> {
    Json(ModelList {
        models: SUPPORTED_MODELS.to_vec(),
        default: DEFAULT_MODEL,
    })
}

pub async fn health() -> &'static str {
    "ok"
}
