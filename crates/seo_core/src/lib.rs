pub mod error;
pub mod fetch;
pub mod models;
pub mod search;
pub mod types;

pub use error::Error;
pub use fetch::PageFetcher;
pub use models::CompletionModel;
pub use search::SearchProvider;
pub use types::{split_keywords, ArticleRequest, GeneratedArticle, SearchResult};

pub type Result<T> = std::result::Result<T, Error>;
