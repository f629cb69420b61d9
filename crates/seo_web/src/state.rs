use std::sync::Arc;
use seo_writer::Composer;

pub struct AppState {
    pub composer: Arc<Composer>,
    /// Used when a request does not carry its own key
    pub default_api_key: Option<String>,
}

impl AppState {
    pub fn new(composer: Arc<Composer>) -> Self {
        Self {
            composer,
            default_api_key: None,
        }
    }

    pub fn with_default_api_key(mut self, api_key: Option<String>) -> Self {
        self.default_api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }
}
