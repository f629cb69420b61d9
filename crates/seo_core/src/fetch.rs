use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Downloads the page at `url` and returns its body as text
    async fn fetch(&self, url: &str) -> Result<String>;
}
