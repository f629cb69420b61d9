use seo_core::ArticleRequest;

/// The single user message sent to the model.
pub fn build_prompt(request: &ArticleRequest, context: &str) -> String {
    format!(
        "You are an expert SEO content writer. Write a detailed and SEO-optimized article about {topic}. \
         Use the following keywords: {keywords}. \
         The article should be around {length} words long, in {language} language, with a {tone} tone, aimed at {audience}. \
         Divide the text into small paragraphs, separated by <p></p> tags. \
         Refer to these top-ranked articles for inspiration: {context}.",
        topic = request.topic,
        keywords = request.keywords,
        length = request.length,
        language = request.language,
        tone = request.tone,
        audience = request.audience,
        context = context,
    )
}
