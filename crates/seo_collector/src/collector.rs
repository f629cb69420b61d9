use std::sync::Arc;
use serde::Serialize;
use seo_core::{split_keywords, PageFetcher, Result, SearchProvider, SearchResult};
use crate::extract::paragraph_text;
use crate::fetcher::HttpFetcher;
use crate::logging::Logger;
use crate::search::create_search_provider;
use crate::{CollectorConfig, DEFAULT_MAX_LINKS_PER_KEYWORD};

/// What happened to one discovered link.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinkOutcome {
    Fetched { result: SearchResult, text: String },
    Failed { result: SearchResult, reason: String },
}

impl LinkOutcome {
    pub fn url(&self) -> &str {
        match self {
            LinkOutcome::Fetched { result, .. } | LinkOutcome::Failed { result, .. } => &result.url,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            LinkOutcome::Fetched { text, .. } => Some(text),
            LinkOutcome::Failed { .. } => None,
        }
    }
}

/// What happened to one keyword.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KeywordOutcome {
    Searched { keyword: String, links: Vec<LinkOutcome> },
    Failed { keyword: String, reason: String },
}

impl KeywordOutcome {
    pub fn keyword(&self) -> &str {
        match self {
            KeywordOutcome::Searched { keyword, .. } | KeywordOutcome::Failed { keyword, .. } => keyword,
        }
    }

    pub fn links(&self) -> &[LinkOutcome] {
        match self {
            KeywordOutcome::Searched { links, .. } => links,
            KeywordOutcome::Failed { .. } => &[],
        }
    }
}

/// Per-keyword report of one collection run.
///
/// `links()` lists every discovered link while `texts()` only holds pages that
/// were fetched, so the two are not aligned.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Collection {
    pub outcomes: Vec<KeywordOutcome>,
}

impl Collection {
    pub fn texts(&self) -> Vec<String> {
        self.link_outcomes()
            .filter_map(|link| link.text().map(str::to_string))
            .collect()
    }

    pub fn links(&self) -> Vec<String> {
        self.link_outcomes().map(|link| link.url().to_string()).collect()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.texts(), self.links())
    }

    pub fn failed_keywords(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, KeywordOutcome::Failed { .. }))
            .map(KeywordOutcome::keyword)
            .collect()
    }

    pub fn failed_links(&self) -> Vec<&str> {
        self.link_outcomes()
            .filter(|l| matches!(l, LinkOutcome::Failed { .. }))
            .map(LinkOutcome::url)
            .collect()
    }

    fn link_outcomes(&self) -> impl Iterator<Item = &LinkOutcome> {
        self.outcomes.iter().flat_map(|o| o.links().iter())
    }
}

/// Turns a keyword list into reference links and their paragraph text.
pub struct ArticleCollector {
    search: Arc<dyn SearchProvider>,
    fetcher: Arc<dyn PageFetcher>,
    max_links_per_keyword: usize,
}

impl ArticleCollector {
    pub fn new(search: Arc<dyn SearchProvider>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            search,
            fetcher,
            max_links_per_keyword: DEFAULT_MAX_LINKS_PER_KEYWORD,
        }
    }

    /// Builds the HTTP fetcher and the configured search provider on one shared client.
    pub fn from_config(config: &CollectorConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config)?;
        let search = create_search_provider(config.provider, fetcher.client().clone());
        Ok(Self::new(search, Arc::new(fetcher)).with_max_links(config.max_links_per_keyword))
    }

    pub fn with_max_links(mut self, max_links_per_keyword: usize) -> Self {
        self.max_links_per_keyword = max_links_per_keyword;
        self
    }

    pub fn search_provider(&self) -> &str {
        self.search.name()
    }

    /// Searches every keyword in turn and fetches its top links.
    ///
    /// Never fails: search and fetch errors are logged and kept in the returned
    /// [`Collection`].
    pub async fn collect(&self, keyword_list: &str) -> Collection {
        let mut outcomes = Vec::new();

        for keyword in split_keywords(keyword_list) {
            let logger = Logger::new().with_new_prefixes(format!("[{}]", keyword));
            outcomes.push(self.collect_keyword(keyword, &logger).await);
        }

        Collection { outcomes }
    }

    async fn collect_keyword(&self, keyword: String, logger: &Logger) -> KeywordOutcome {
        let results = match self.search.search(&keyword).await {
            Ok(results) => results,
            Err(e) => {
                logger.warn(&format!("Error fetching search results from {}: {}", self.search.name(), e));
                return KeywordOutcome::Failed {
                    keyword,
                    reason: e.to_string(),
                };
            }
        };
        logger.debug(&format!(
            "{} results: {}",
            results.len(),
            results.iter().map(|r| r.url.as_str()).collect::<Vec<_>>().join(" ")
        ));

        let mut links = Vec::new();
        for result in results
            .into_iter()
            .filter(SearchResult::is_web_link)
            .take(self.max_links_per_keyword)
        {
            links.push(self.collect_link(result, logger).await);
        }

        KeywordOutcome::Searched { keyword, links }
    }

    async fn collect_link(&self, result: SearchResult, logger: &Logger) -> LinkOutcome {
        let logger = logger.clone().with_prefix(format!("[{}]", result.url));

        let text = self
            .fetcher
            .fetch(&result.url)
            .await
            .and_then(|html| paragraph_text(&html));

        match text {
            Ok(text) => {
                logger.info(&format!("Fetched {} characters of paragraph text", text.len()));
                LinkOutcome::Fetched { result, text }
            }
            Err(e) => {
                logger.warn(&format!("Failed to fetch article: {}", e));
                LinkOutcome::Failed {
                    result,
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use seo_core::Error;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSearch {
        results: HashMap<String, Vec<String>>,
        queries: Mutex<Vec<String>>,
    }

    impl MockSearch {
        fn with(mut self, keyword: &str, urls: &[&str]) -> Self {
            self.results
                .insert(keyword.to_string(), urls.iter().map(|u| u.to_string()).collect());
            self
        }
    }

    #[async_trait]
    impl SearchProvider for MockSearch {
        fn name(&self) -> &str {
            "mock"
        }

        async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
            self.queries.lock().unwrap().push(query.to_string());
            self.results
                .get(query)
                .map(|urls| urls.iter().map(|u| SearchResult::new(u.clone(), "mock")).collect())
                .ok_or_else(|| Error::Search(format!("no results for {}", query)))
        }
    }

    #[derive(Default)]
    struct MockFetcher {
        pages: HashMap<String, String>,
        fetched: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        fn with(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }
    }

    #[async_trait]
    impl PageFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.fetched.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| Error::Fetch(format!("{} returned HTTP 404 Not Found", url)))
        }
    }

    fn collector(search: Arc<MockSearch>, fetcher: Arc<MockFetcher>) -> ArticleCollector {
        ArticleCollector::new(search, fetcher)
    }

    #[tokio::test]
    async fn test_keywords_are_trimmed() {
        let search = Arc::new(MockSearch::default().with("foo", &[]).with("bar", &[]));
        let fetcher = Arc::new(MockFetcher::default());

        collector(search.clone(), fetcher).collect(" foo , bar ").await;

        assert_eq!(*search.queries.lock().unwrap(), vec!["foo", "bar"]);
    }

    #[tokio::test]
    async fn test_at_most_two_links_per_keyword() {
        let search = Arc::new(MockSearch::default().with(
            "solar",
            &["https://a.example", "https://b.example", "https://c.example", "https://d.example"],
        ));
        let fetcher = Arc::new(
            MockFetcher::default()
                .with("https://a.example", "<p>A</p>")
                .with("https://b.example", "<p>B</p>")
                .with("https://c.example", "<p>C</p>"),
        );

        let (texts, links) = collector(search, fetcher.clone()).collect("solar").await.into_parts();

        assert_eq!(links, vec!["https://a.example", "https://b.example"]);
        assert_eq!(texts, vec!["A", "B"]);
        assert_eq!(fetcher.fetched.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_link_but_no_text() {
        let search = Arc::new(MockSearch::default().with("solar", &["https://down.example", "https://up.example"]));
        let fetcher = Arc::new(MockFetcher::default().with("https://up.example", "<p>Sunny</p><p>days</p>"));

        let collection = collector(search, fetcher).collect("solar").await;

        assert_eq!(collection.links(), vec!["https://down.example", "https://up.example"]);
        assert_eq!(collection.texts(), vec!["Sunny days"]);
        assert_eq!(collection.failed_links(), vec!["https://down.example"]);
    }

    #[tokio::test]
    async fn test_every_search_failing_yields_empty_parts() {
        let search = Arc::new(MockSearch::default());
        let fetcher = Arc::new(MockFetcher::default());

        let collection = collector(search, fetcher).collect("one, two, three").await;

        assert_eq!(collection.failed_keywords(), vec!["one", "two", "three"]);
        let (texts, links) = collection.into_parts();
        assert!(texts.is_empty());
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_failed_keyword_does_not_stop_batch() {
        let search = Arc::new(MockSearch::default().with("good", &["https://good.example"]));
        let fetcher = Arc::new(MockFetcher::default().with("https://good.example", "<p>ok</p>"));

        let (texts, links) = collector(search, fetcher).collect("bad, good").await.into_parts();

        assert_eq!(links, vec!["https://good.example"]);
        assert_eq!(texts, vec!["ok"]);
    }

    #[tokio::test]
    async fn test_page_without_paragraphs_gives_empty_text() {
        let search = Arc::new(MockSearch::default().with("solar", &["https://bare.example"]));
        let fetcher = Arc::new(MockFetcher::default().with("https://bare.example", "<div>no paragraphs</div>"));

        let (texts, links) = collector(search, fetcher).collect("solar").await.into_parts();

        assert_eq!(texts, vec![""]);
        assert_eq!(links, vec!["https://bare.example"]);
    }

    #[tokio::test]
    async fn test_non_web_links_are_skipped_before_the_cap() {
        let search = Arc::new(MockSearch::default().with(
            "solar",
            &["ftp://files.example", "https://a.example", "https://b.example"],
        ));
        let fetcher = Arc::new(MockFetcher::default());

        let links = collector(search, fetcher).collect("solar").await.links();

        assert_eq!(links, vec!["https://a.example", "https://b.example"]);
    }

    #[tokio::test]
    async fn test_links_follow_keyword_order() {
        let search = Arc::new(
            MockSearch::default()
                .with("first", &["https://1.example"])
                .with("second", &["https://2.example"]),
        );
        let fetcher = Arc::new(MockFetcher::default());

        let collection = collector(search, fetcher).collect("first,second").await;

        assert_eq!(collection.outcomes.len(), 2);
        assert_eq!(collection.outcomes[0].keyword(), "first");
        assert_eq!(collection.links(), vec!["https://1.example", "https://2.example"]);
    }

    #[tokio::test]
    async fn test_custom_link_cap() {
        let search = Arc::new(MockSearch::default().with(
            "solar",
            &["https://a.example", "https://b.example", "https://c.example"],
        ));
        let fetcher = Arc::new(MockFetcher::default());

        let links = collector(search, fetcher).with_max_links(1).collect("solar").await.links();

        assert_eq!(links, vec!["https://a.example"]);
    }

    #[tokio::test]
    async fn test_report_serializes_with_status() {
        let search = Arc::new(MockSearch::default().with("solar", &["https://down.example"]));
        let fetcher = Arc::new(MockFetcher::default());

        let collection = collector(search, fetcher).collect("solar, wind").await;
        let json = serde_json::to_value(&collection).unwrap();

        assert_eq!(json["outcomes"][0]["status"], "searched");
        assert_eq!(json["outcomes"][0]["links"][0]["status"], "failed");
        assert_eq!(json["outcomes"][0]["links"][0]["result"]["url"], "https://down.example");
        assert_eq!(json["outcomes"][1]["status"], "failed");
        assert_eq!(json["outcomes"][1]["keyword"], "wind");
    }

    #[test]
    fn test_from_config() {
        let collector = ArticleCollector::from_config(&CollectorConfig::default()).unwrap();
        assert_eq!(collector.search_provider(), "duckduckgo");
        assert_eq!(collector.max_links_per_keyword, DEFAULT_MAX_LINKS_PER_KEYWORD);
    }
}
