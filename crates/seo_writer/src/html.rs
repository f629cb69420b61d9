/// Number of characters of generated text used for the description meta tag.
pub const DESCRIPTION_CHARS: usize = 100;

/// First [`DESCRIPTION_CHARS`] characters of `text`, never splitting a character.
pub fn description(text: &str) -> &str {
    match text.char_indices().nth(DESCRIPTION_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Wraps generated text in the article template.
///
/// Model output and the keyword string are inserted as-is, without escaping.
pub fn render_article(topic: &str, keywords: &str, text: &str) -> String {
    format!(
        r#"<html>
<head>
    <title>{topic}</title>
    <meta name="keywords" content="{keywords}">
    <meta name="description" content="{description}">
</head>
<body>
    <h1>{topic}</h1>
    <p>{text}</p>
</body>
</html>
"#,
        topic = topic,
        keywords = keywords,
        description = description(text),
        text = text,
    )
}

pub fn render_error(message: &str) -> String {
    format!(
        "<html><body><h1>Error</h1><p>Error generating SEO content: {}</p></body></html>",
        message
    )
}
