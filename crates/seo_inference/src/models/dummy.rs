use std::fmt;
use seo_core::{CompletionModel, Result};

/// Deterministic offline model: answers with the leading words of the prompt
/// split into paragraphs.
pub struct DummyModel {
    words: usize,
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").field("words", &self.words).finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self { words: 40 }
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CompletionModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let words: Vec<&str> = prompt.split_whitespace().take(self.words).collect();
        Ok(words
            .chunks(20)
            .map(|chunk| format!("<p>{}</p>", chunk.join(" ")))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
