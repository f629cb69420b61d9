use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// A single ranked hit returned by a search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub source: String,
}

impl SearchResult {
    pub fn new(url: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            url: url.into(),
            snippet: String::new(),
            source: source.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// True when the url parses and uses the http or https scheme
    pub fn is_web_link(&self) -> bool {
        Url::parse(&self.url)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false)
    }
}

/// Splits a comma separated keyword list into trimmed search queries.
///
/// Blank entries (`"a,,b"`, trailing commas) are dropped.
pub fn split_keywords(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|keyword| {
            if keyword.is_empty() {
                tracing::debug!("Skipping blank keyword in {:?}", list);
            }
            !keyword.is_empty()
        })
        .map(str::to_string)
        .collect()
}

/// Everything needed to write one article.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleRequest {
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub topic: String,
    pub keywords: String,
    pub length: u32,
    pub language: String,
    pub tone: String,
    pub audience: String,
}

impl ArticleRequest {
    pub fn new(topic: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            keywords: keywords.into(),
            ..Self::default()
        }
    }

    /// The keyword list handed to the collector: the topic is searched too.
    pub fn search_terms(&self) -> String {
        format!("{}, {}", self.topic, self.keywords)
    }
}

impl Default for ArticleRequest {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            topic: String::new(),
            keywords: String::new(),
            length: 100,
            language: "English".to_string(),
            tone: "exciting".to_string(),
            audience: "general".to_string(),
        }
    }
}

impl std::fmt::Debug for ArticleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleRequest")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("topic", &self.topic)
            .field("keywords", &self.keywords)
            .field("length", &self.length)
            .field("language", &self.language)
            .field("tone", &self.tone)
            .field("audience", &self.audience)
            .finish()
    }
}

/// The finished HTML document plus the links used as references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArticle {
    pub html: String,
    pub references: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedArticle {
    pub fn new(html: String, references: Vec<String>) -> Self {
        Self {
            html,
            references,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keywords_trims() {
        assert_eq!(split_keywords(" foo , bar "), vec!["foo", "bar"]);
        assert_eq!(split_keywords("solar panels, efficiency, cost"), vec!["solar panels", "efficiency", "cost"]);
    }

    #[test]
    fn test_split_keywords_skips_blank() {
        assert_eq!(split_keywords("topic, "), vec!["topic"]);
        assert_eq!(split_keywords("a,,b"), vec!["a", "b"]);
        assert!(split_keywords("  ").is_empty());
    }

    #[test]
    fn test_search_terms_include_topic() {
        let request = ArticleRequest::new("solar panels", "efficiency, cost");
        assert_eq!(request.search_terms(), "solar panels, efficiency, cost");
    }

    #[test]
    fn test_request_defaults() {
        let request: ArticleRequest = serde_json::from_str(r#"{"topic": "rust", "keywords": "cargo"}"#).unwrap();
        assert_eq!(request.model, DEFAULT_MODEL);
        assert_eq!(request.length, 100);
        assert_eq!(request.language, "English");
        assert_eq!(request.tone, "exciting");
        assert_eq!(request.audience, "general");
        assert!(request.api_key.is_none());
    }

    #[test]
    fn test_request_never_serializes_key() {
        let mut request = ArticleRequest::new("rust", "cargo");
        request.api_key = Some("sk-secret".to_string());
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(!format!("{:?}", request).contains("sk-secret"));
    }

    #[test]
    fn test_is_web_link() {
        assert!(SearchResult::new("https://example.com/a", "test").is_web_link());
        assert!(SearchResult::new("http://example.com", "test").is_web_link());
        assert!(!SearchResult::new("ftp://example.com", "test").is_web_link());
        assert!(!SearchResult::new("not a url", "test").is_web_link());
    }
}
