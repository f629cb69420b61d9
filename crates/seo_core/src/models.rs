use std::fmt;
use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait CompletionModel: Send + Sync + fmt::Debug {
    /// Name of the backing provider, used in logs
    fn name(&self) -> &str;

    /// Send `prompt` as a single user message and return the raw completion text
    async fn complete(&self, prompt: &str) -> Result<String>;
}
