//! Link density measurement.
//!
//! The share of an element's text that sits inside `<a>` descendants. Menus,
//! tag clouds and "related" blocks are link-dense; article prose is not.

use crate::dom::{Document, NodeId};

/// Text and anchor-text lengths of one element, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkStats {
    /// Length of the element's trimmed text.
    pub text_len: usize,
    /// Sum of the trimmed text lengths of every `<a>` descendant.
    pub link_len: usize,
}

impl LinkStats {
    /// Fraction of the text contributed by anchors; `0.0` for empty text.
    #[must_use]
    pub fn density(&self) -> f64 {
        if self.text_len == 0 {
            return 0.0;
        }
        self.link_len as f64 / self.text_len as f64
    }
}

/// Sum the trimmed text length of every `<a>` under `id`.
#[must_use]
pub fn link_text_len(doc: &Document, id: NodeId) -> usize {
    doc.select(id, &["a"])
        .into_iter()
        .map(|link| doc.text(link).trim().chars().count())
        .sum()
}

/// Collect text and link lengths for `id`.
///
/// `text_len` is passed in because the caller has already flattened the
/// element's text to apply the length filter.
#[must_use]
pub fn collect_link_stats(doc: &Document, id: NodeId, text_len: usize) -> LinkStats {
    LinkStats {
        text_len,
        link_len: link_text_len(doc, id),
    }
}

/// Link density of `id`.
///
/// ```
/// use rs_readable::{dom, link_density::link_density};
/// use url::Url;
///
/// let base = Url::parse("https://example.com/")?;
/// let doc = dom::parse(r#"<p>Read <a href="/a">this</a> now</p>"#, &base);
/// let p = doc.select(doc.root(), &["p"])[0];
/// assert!((link_density(&doc, p) - 4.0 / 13.0).abs() < 1e-9);
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn link_density(doc: &Document, id: NodeId) -> f64 {
    let text_len = doc.text(id).trim().chars().count();
    collect_link_stats(doc, id, text_len).density()
}
