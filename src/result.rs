//! Input and output types of the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Raw response bytes as handed over by the fetch collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDocument<'a> {
    /// Undecoded response body.
    pub bytes: &'a [u8],

    /// Transport `Content-Type` header value, if any.
    pub content_type: Option<&'a str>,
}

impl<'a> RawDocument<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], content_type: Option<&'a str>) -> Self {
        Self { bytes, content_type }
    }
}

/// The article extracted from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedArticle {
    /// Trimmed text of the page `<title>`; empty when absent.
    pub title: String,

    /// Main content rendered as markdown.
    ///
    /// Headings, paragraphs, list items, blockquotes, fenced code, inline
    /// emphasis and links with absolute URLs.
    pub content_markdown: String,
}
