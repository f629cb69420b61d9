pub mod composer;
pub mod html;
pub mod prompt;

pub use composer::{Composer, ModelFactory};

pub mod prelude {
    pub use super::composer::{Composer, ModelFactory};
    pub use seo_core::{ArticleRequest, GeneratedArticle, Result, Error};
}
