//! DuckDuckGo search through its HTML endpoint. No API key required.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use seo_core::{Error, Result, SearchProvider, SearchResult};
use url::Url;

use super::pattern::TextSearch;

const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";
const SOURCE: &str = "duckduckgo";

#[derive(Debug, Clone)]
pub struct DuckDuckGoProvider {
    client: Client,
    endpoint: String,
}

impl DuckDuckGoProvider {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            endpoint: DDG_HTML_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn fetch_results_page(&self, query: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Search(format!("DuckDuckGo returned HTTP {}", status)));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let html = self.fetch_results_page(query).await?;
        parse_results(&html)
    }
}

#[async_trait]
impl TextSearch for DuckDuckGoProvider {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn search_text(&self, query: &str) -> Result<String> {
        let html = self.fetch_results_page(query).await?;
        Ok(render_text(&parse_results(&html)?))
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Extraction(format!("Invalid selector: {}", e)))
}

/// Parses the organic results of a DuckDuckGo HTML page, skipping ads.
pub fn parse_results(html: &str) -> Result<Vec<SearchResult>> {
    let result_selector = selector("div.result")?;
    let link_selector = selector("a.result__a")?;
    let snippet_selector = selector(".result__snippet")?;

    let document = Html::parse_document(html);
    let mut results = Vec::new();

    for block in document.select(&result_selector) {
        if block.value().classes().any(|c| c == "result--ad") {
            continue;
        }

        let Some(link) = block.select(&link_selector).next() else {
            continue;
        };
        let Some(url) = link.value().attr("href").and_then(resolve_href) else {
            continue;
        };

        let title = link.text().collect::<String>().trim().to_string();
        let snippet = block
            .select(&snippet_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        results.push(
            SearchResult::new(url, SOURCE)
                .with_title(title)
                .with_snippet(snippet),
        );
    }

    Ok(results)
}

/// Turns a result href into the target url, unwrapping `/l/?uddg=` redirects.
fn resolve_href(href: &str) -> Option<String> {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };
    let url = Url::parse(&absolute).ok()?;

    if url.host_str().is_some_and(|h| h.ends_with("duckduckgo.com")) {
        return url
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned());
    }

    matches!(url.scheme(), "http" | "https").then_some(absolute)
}

/// Renders results in the `snippet: .., title: .., link: ..` text form.
pub fn render_text(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| format!("snippet: {}, title: {}, link: {}", r.snippet, r.title, r.url))
        .collect::<Vec<_>>()
        .join(", ")
}
