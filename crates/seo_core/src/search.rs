use async_trait::async_trait;
use crate::types::SearchResult;
use crate::Result;

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Returns the name of the search provider
    fn name(&self) -> &str;

    /// Runs one query and returns the results in ranking order
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}
