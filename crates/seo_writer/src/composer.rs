use std::sync::Arc;
use std::time::Duration;
use seo_collector::ArticleCollector;
use seo_core::{ArticleRequest, CompletionModel, GeneratedArticle, Result};
use seo_inference::{create_model, Config};
use tracing::{error, info};
use crate::html::{render_article, render_error};
use crate::prompt::build_prompt;

/// Builds the completion model for one request from its model name and key.
pub type ModelFactory = Arc<dyn Fn(Config) -> Result<Arc<dyn CompletionModel>> + Send + Sync>;

pub struct Composer {
    collector: ArticleCollector,
    model_factory: ModelFactory,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl Composer {
    pub fn new(collector: ArticleCollector) -> Self {
        let model_factory: ModelFactory = Arc::new(create_model);
        Self {
            collector,
            model_factory,
            base_url: None,
            timeout: None,
        }
    }

    pub fn with_model_factory(mut self, model_factory: ModelFactory) -> Self {
        self.model_factory = model_factory;
        self
    }

    /// OpenAI-compatible endpoint used instead of the public API.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Writes one article. Errors never escape: they are rendered as an error
    /// document with no references.
    pub async fn compose(&self, request: &ArticleRequest) -> GeneratedArticle {
        match self.try_compose(request).await {
            Ok(article) => article,
            Err(e) => {
                error!("❌ Error generating SEO content for {}: {}", request.topic, e);
                GeneratedArticle::new(render_error(&e.to_string()), Vec::new())
            }
        }
    }

    /// Same pipeline as [`Composer::compose`] but hands the error back.
    pub async fn try_compose(&self, request: &ArticleRequest) -> Result<GeneratedArticle> {
        let config = Config::new(request.model.clone(), request.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout);
        let model = (self.model_factory)(config)?;
        info!("🧠 Writing about {} with {} ({})", request.topic, model.name(), request.model);

        let (texts, references) = self.collector.collect(&request.search_terms()).await.into_parts();
        info!("🔗 Collected {} references, {} with text", references.len(), texts.len());

        let context = texts.join(" ");
        let prompt = build_prompt(request, &context);

        let generated = model.complete(&prompt).await?;
        let text = generated.trim();
        info!("✨ Generated {} characters", text.len());

        Ok(GeneratedArticle::new(
            render_article(&request.topic, &request.keywords, text),
            references,
        ))
    }
}
