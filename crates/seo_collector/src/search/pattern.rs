use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use seo_core::{Result, SearchProvider, SearchResult};

lazy_static! {
    static ref LINK_PATTERN: Regex = Regex::new(r"link: (https?://[^\s]+)").expect("valid link pattern");
}

/// A provider that only hands back an unstructured text blob with embedded
/// `link: <url>` markers.
#[async_trait]
pub trait TextSearch: Send + Sync {
    fn name(&self) -> &str;

    async fn search_text(&self, query: &str) -> Result<String>;
}

/// All `link: <url>` targets in `text`, in order of appearance.
///
/// Separators that the blob format glues onto the url (`,`, `;`, `]`) are stripped.
pub fn extract_links(text: &str) -> Vec<String> {
    LINK_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches(&[',', ';', ']'][..]).to_string())
        .collect()
}

/// Adapts a [`TextSearch`] into a structured [`SearchProvider`].
pub struct LinkPatternAdapter<T> {
    inner: T,
}

impl<T: TextSearch> LinkPatternAdapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: TextSearch> SearchProvider for LinkPatternAdapter<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let text = self.inner.search_text(query).await?;
        tracing::debug!("Results for {}: {}", query, text);

        Ok(extract_links(&text)
            .into_iter()
            .map(|url| SearchResult::new(url, self.inner.name()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedText(&'static str);

    #[async_trait]
    impl TextSearch for CannedText {
        fn name(&self) -> &str {
            "canned"
        }

        async fn search_text(&self, _query: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_extract_links() {
        let blob = "snippet: Panels convert light, title: Solar 101, link: https://example.com/solar, \
                    snippet: Costs drop, title: Prices, link: http://news.example.org/prices?id=3";
        assert_eq!(
            extract_links(blob),
            vec!["https://example.com/solar", "http://news.example.org/prices?id=3"]
        );
    }

    #[test]
    fn test_extract_links_bracketed_format() {
        let blob = "[snippet: a, title: b, link: https://a.example/x], [snippet: c, title: d, link: https://b.example/y]";
        assert_eq!(extract_links(blob), vec!["https://a.example/x", "https://b.example/y"]);
    }

    #[test]
    fn test_extract_links_ignores_other_schemes() {
        assert!(extract_links("link: ftp://example.com/file link:https://nospace.example").is_empty());
    }

    #[tokio::test]
    async fn test_adapter_yields_records() {
        let adapter = LinkPatternAdapter::new(CannedText(
            "snippet: s, title: t, link: https://one.example, snippet: s, title: t, link: https://two.example",
        ));
        let results = adapter.search("anything").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://one.example");
        assert_eq!(results[0].source, "canned");
        assert_eq!(adapter.name(), "canned");
    }
}
