//! The extraction pipeline: bytes → text → DOM → main content → markdown.
//!
//! Every stage is a pure function of its input. Nothing is cached between
//! calls and no I/O happens here, so independent documents can be processed
//! concurrently without coordination.

use url::Url;

use crate::result::{ExtractedArticle, RawDocument};
use crate::{dom, encoding, markdown, scoring, Options, Result};

/// Decode, score and render a raw document.
pub(crate) fn extract_document(
    raw: RawDocument<'_>,
    base_url: &Url,
    options: &Options,
) -> Result<ExtractedArticle> {
    let _span = tracing::debug_span!("extract", url = %base_url, bytes = raw.bytes.len()).entered();

    let decoded = encoding::decode_with_options(raw.bytes, raw.content_type, options)?;
    extract_html_content(&decoded.text, base_url, options)
}

/// Score and render already-decoded HTML.
pub(crate) fn extract_html_content(
    html: &str,
    base_url: &Url,
    options: &Options,
) -> Result<ExtractedArticle> {
    let mut doc = dom::parse(html, base_url);
    let title = doc.title();

    let candidate = scoring::select_main_content(&mut doc, options)?;
    let content_markdown = markdown::render(&doc, candidate.node, doc.base_url())?;

    tracing::debug!(
        title_len = title.len(),
        markdown_len = content_markdown.len(),
        "extracted article"
    );
    Ok(ExtractedArticle {
        title,
        content_markdown,
    })
}

/// Turns decoded HTML into an article.
///
/// The seam where an orchestration layer can swap the readability heuristics
/// for another parser.
pub trait ContentParser {
    /// Extract the article from `html`, resolving links against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ContentParseFailed`] or
    /// [`crate::Error::EmptyContent`] when no article can be produced.
    fn parse(&self, html: &str, base_url: &Url) -> Result<ExtractedArticle>;
}

/// The candidate-scoring parser used by [`crate::extract`].
#[derive(Debug, Clone, Default)]
pub struct ReadabilityParser {
    options: Options,
}

impl ReadabilityParser {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl ContentParser for ReadabilityParser {
    fn parse(&self, html: &str, base_url: &Url) -> Result<ExtractedArticle> {
        extract_html_content(html, base_url, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn base() -> Url {
        Url::parse("https://example.com/news").unwrap()
    }

    #[test]
    fn title_survives_noise_removal() {
        let html = "<html><head><title> Page </title></head>\
                    <body><article><p>Enough article text here.</p></article></body></html>";
        let article = extract_html_content(html, &base(), &Options::default()).unwrap();
        assert_eq!(article.title, "Page");
        assert_eq!(article.content_markdown, "Enough article text here.\n");
    }

    #[test]
    fn missing_title_is_empty() {
        let html = "<p>A paragraph with enough text.</p>";
        let article = extract_html_content(html, &base(), &Options::default()).unwrap();
        assert_eq!(article.title, "");
    }

    #[test]
    fn decode_failure_stops_the_pipeline() {
        let raw = RawDocument::new(b"<p>caf\xE9 au lait, long enough</p>", None);
        assert_eq!(
            extract_document(raw, &base(), &Options::default()),
            Err(Error::CharsetDetectionFailed)
        );
    }

    #[test]
    fn text_only_inside_noise_is_not_content() {
        let html = "<div><aside>Related stories you may like</aside><img src='x.png'></div>";
        assert_eq!(
            extract_html_content(html, &base(), &Options::default()),
            Err(Error::ContentParseFailed)
        );
    }

    #[test]
    fn links_resolve_against_the_parsed_base() {
        let base = Url::parse("https://example.com/blog/2024/post").unwrap();
        let html = "<article><p>Read the <a href='../intro'>intro</a> before this one.</p></article>";
        let article = extract_html_content(html, &base, &Options::default()).unwrap();
        assert_eq!(
            article.content_markdown,
            "Read the [intro](https://example.com/blog/intro) before this one.\n"
        );
    }

    #[test]
    fn parser_trait_uses_its_options() {
        let parser = ReadabilityParser::new(Options {
            min_candidate_len: 100,
            ..Options::default()
        });
        let html = "<article><p>Twenty-five characters ok.</p></article>";
        assert_eq!(parser.parse(html, &base()), Err(Error::ContentParseFailed));

        let article = ReadabilityParser::default().parse(html, &base()).unwrap();
        assert_eq!(article.content_markdown, "Twenty-five characters ok.\n");
        assert_eq!(parser.options().min_candidate_len, 100);
    }
}
