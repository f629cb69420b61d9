use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use reqwest::Client;
use seo_core::SearchProvider;

pub mod duckduckgo;
pub mod pattern;

pub use duckduckgo::DuckDuckGoProvider;
pub use pattern::{extract_links, LinkPatternAdapter, TextSearch};

/// Which search backend the collector talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// DuckDuckGo HTML results parsed into structured records
    #[default]
    DuckDuckGo,
    /// DuckDuckGo results rendered as a `snippet: .., title: .., link: ..` blob
    /// and run through the link pattern
    DuckDuckGoText,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::DuckDuckGo, ProviderKind::DuckDuckGoText];

    pub fn cli_name(&self) -> &'static str {
        match self {
            ProviderKind::DuckDuckGo => "duckduckgo",
            ProviderKind::DuckDuckGoText => "duckduckgo-text",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "duckduckgo" | "ddg" => Ok(ProviderKind::DuckDuckGo),
            "duckduckgo-text" | "ddg-text" => Ok(ProviderKind::DuckDuckGoText),
            other => Err(format!(
                "Unknown search provider: {} (available: {})",
                other,
                ProviderKind::ALL.iter().map(|k| k.cli_name()).collect::<Vec<_>>().join(", ")
            )),
        }
    }
}

pub fn create_search_provider(kind: ProviderKind, client: Client) -> Arc<dyn SearchProvider> {
    match kind {
        ProviderKind::DuckDuckGo => Arc::new(DuckDuckGoProvider::new(client)),
        ProviderKind::DuckDuckGoText => Arc::new(LinkPatternAdapter::new(DuckDuckGoProvider::new(client))),
    }
}
