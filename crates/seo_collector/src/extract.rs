use scraper::{Html, Selector};
use seo_core::{Error, Result};

/// Text of every `<p>` element in the page, joined by single spaces.
///
/// A page without paragraphs yields an empty string.
pub fn paragraph_text(html: &str) -> Result<String> {
    let selector = Selector::parse("p")
        .map_err(|e| Error::Extraction(format!("Invalid selector: {}", e)))?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" "))
}
