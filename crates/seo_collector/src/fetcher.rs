use async_trait::async_trait;
use reqwest::Client;
use seo_core::{PageFetcher, Result};
use crate::CollectorConfig;

/// Plain HTTP GET fetcher backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        // Non-2xx bodies are still handed to extraction
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} returned HTTP {}", url, status);
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::paragraph_text;
    use axum::{http::StatusCode, response::Html, routing::get, Router};
    use std::time::Duration;

    async fn spawn_site() -> String {
        let app = Router::new()
            .route("/article", get(|| async { Html("<p>Open paragraph</p>") }))
            .route(
                "/paywall",
                get(|| async { (StatusCode::FORBIDDEN, Html("<p>Paywalled teaser paragraph</p>")) }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{}", addr)
    }

    #[test]
    fn test_fetcher_from_config() {
        let config = CollectorConfig {
            fetch_timeout: Duration::from_secs(5),
            ..CollectorConfig::default()
        };
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let config = CollectorConfig {
            fetch_timeout: Duration::from_secs(2),
            ..CollectorConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        // Port 9 on localhost is the discard service and is closed almost everywhere
        let result = fetcher.fetch("http://127.0.0.1:9/").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetches_page_body() {
        let base = spawn_site().await;
        let fetcher = HttpFetcher::new(&CollectorConfig::default()).unwrap();

        let html = fetcher.fetch(&format!("{}/article", base)).await.unwrap();
        assert_eq!(paragraph_text(&html).unwrap(), "Open paragraph");
    }

    #[tokio::test]
    async fn test_error_status_still_returns_body() {
        let base = spawn_site().await;
        let fetcher = HttpFetcher::new(&CollectorConfig::default()).unwrap();

        let html = fetcher.fetch(&format!("{}/paywall", base)).await.unwrap();
        assert_eq!(paragraph_text(&html).unwrap(), "Paywalled teaser paragraph");

        let html = fetcher.fetch(&format!("{}/missing", base)).await.unwrap();
        assert_eq!(paragraph_text(&html).unwrap(), "");
    }
}
