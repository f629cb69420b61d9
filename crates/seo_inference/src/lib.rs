use std::fmt;
use std::time::Duration;

pub mod models;

pub use models::create_model;
pub use seo_core::CompletionModel;

pub const DEFAULT_MODEL: &str = seo_core::types::DEFAULT_MODEL;
pub const SUPPORTED_MODELS: [&str; 2] = ["gpt-3.5-turbo", "gpt-4"];
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(model_name: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_key,
            model_name: Some(model_name.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model_name(&self) -> &str {
        self.model_name.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_model;
    pub use seo_core::{CompletionModel, Result, Error};
}
