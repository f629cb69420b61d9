use std::sync::Arc;
use seo_core::{CompletionModel, Result};
use crate::Config;

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

/// Model name that selects the offline [`DummyModel`].
pub const DUMMY_MODEL: &str = "dummy";

/// Builds the completion model named in `config`.
///
/// `dummy` gives the offline model; every other name is sent to the
/// OpenAI-compatible chat endpoint, which needs an API key.
pub fn create_model(config: Config) -> Result<Arc<dyn CompletionModel>> {
    if config.model_name() == DUMMY_MODEL {
        tracing::debug!("Using offline dummy model");
        return Ok(Arc::new(DummyModel::new()));
    }
    Ok(Arc::new(OpenAiModel::new(config)?))
}
