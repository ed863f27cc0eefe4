//! # rs-readable
//!
//! Readability-style article extraction for arbitrary, possibly mislabeled
//! web pages.
//!
//! The pipeline turns raw response bytes into a clean markdown document:
//!
//! 1. **Decode**: byte-order mark, transport `charset`, in-document
//!    `charset`, then UTF-8 ([`encoding`]).
//! 2. **Parse** into an owned arena DOM ([`dom`]).
//! 3. **Score** every `article`/`main`/`section`/`div`/`p` on text length,
//!    tag weight and link density after stripping navigation and other noise
//!    ([`scoring`]).
//! 4. **Render** the winner as markdown with absolute links ([`markdown`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readable::extract;
//! use url::Url;
//!
//! let html = br#"<html><head><title>My Article</title></head>
//! <body><nav>Home | About</nav><article><h1>Headline</h1>
//! <p>Main content with a <a href="/more">link</a>.</p></article></body></html>"#;
//!
//! let base = Url::parse("https://example.com/post")?;
//! let article = extract(html, Some("text/html; charset=utf-8"), &base)?;
//! assert_eq!(article.title, "My Article");
//! assert!(article.content_markdown.contains("# Headline"));
//! assert!(article.content_markdown.contains("[link](https://example.com/more)"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The library performs no I/O and keeps no state between calls. It logs
//! through `tracing` and never installs a subscriber.

mod error;
mod extract;
mod options;
mod result;

/// Owned arena DOM built from parsed HTML.
pub mod dom;

/// Character encoding detection and decoding.
pub mod encoding;

/// Link density measurement.
pub mod link_density;

/// Main-content candidate scoring.
pub mod scoring;

/// Markdown rendering of the selected subtree.
pub mod markdown;

/// URL resolution for content links.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{ContentParser, ReadabilityParser};
pub use options::{Options, DEFAULT_NOISE_TAGS};
pub use result::{ExtractedArticle, RawDocument};

use url::Url;

/// Extracts the main article from raw response bytes using default options.
///
/// # Arguments
///
/// * `bytes` - The undecoded response body
/// * `content_type` - The transport `Content-Type` header, if known
/// * `base_url` - URL the page was fetched from; relative links resolve against it
///
/// # Errors
///
/// * [`Error::CharsetDetectionFailed`] when the bytes cannot be decoded
/// * [`Error::ContentParseFailed`] when no element qualifies as content
/// * [`Error::EmptyContent`] when the chosen element renders blank
pub fn extract(bytes: &[u8], content_type: Option<&str>, base_url: &Url) -> Result<ExtractedArticle> {
    extract_with_options(bytes, content_type, base_url, &Options::default())
}

/// Extracts the main article from raw response bytes with custom options.
///
/// # Example
///
/// ```rust
/// use rs_readable::{extract_with_options, Error, Options};
/// use url::Url;
///
/// let html = b"<html><body><p>Short but real.</p></body></html>";
/// let base = Url::parse("https://example.com/")?;
/// let strict = Options {
///     min_candidate_len: 50,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, None, &base, &strict);
/// assert_eq!(result, Err(Error::ContentParseFailed));
/// # Ok::<(), url::ParseError>(())
/// ```
///
/// # Errors
///
/// Same as [`extract`].
pub fn extract_with_options(
    bytes: &[u8],
    content_type: Option<&str>,
    base_url: &Url,
    options: &Options,
) -> Result<ExtractedArticle> {
    extract::extract_document(RawDocument::new(bytes, content_type), base_url, options)
}

/// Extracts the main article from already-decoded HTML.
///
/// For callers whose fetch layer has decoded the body already; skips the
/// charset cascade.
///
/// # Errors
///
/// * [`Error::ContentParseFailed`] when no element qualifies as content
/// * [`Error::EmptyContent`] when the chosen element renders blank
pub fn extract_html(html: &str, base_url: &Url) -> Result<ExtractedArticle> {
    extract_html_with_options(html, base_url, &Options::default())
}

/// Extracts the main article from already-decoded HTML with custom options.
///
/// # Errors
///
/// Same as [`extract_html`].
pub fn extract_html_with_options(
    html: &str,
    base_url: &Url,
    options: &Options,
) -> Result<ExtractedArticle> {
    extract::extract_html_content(html, base_url, options)
}
