pub mod collector;
pub mod extract;
pub mod fetcher;
pub mod logging;
pub mod search;

use std::time::Duration;

pub use collector::{ArticleCollector, Collection, KeywordOutcome, LinkOutcome};
pub use fetcher::HttpFetcher;
pub use search::{create_search_provider, ProviderKind};

pub const DEFAULT_MAX_LINKS_PER_KEYWORD: usize = 2;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub max_links_per_keyword: usize,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    pub provider: ProviderKind,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_links_per_keyword: DEFAULT_MAX_LINKS_PER_KEYWORD,
            fetch_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            provider: ProviderKind::default(),
        }
    }
}

pub mod prelude {
    pub use super::collector::{ArticleCollector, Collection};
    pub use super::CollectorConfig;
    pub use seo_core::{PageFetcher, Result, Error, SearchProvider, SearchResult};
}
