//! Configuration options for content extraction.
//!
//! The `Options` struct exposes the thresholds of the extraction pipeline.
//! The defaults reproduce the standard behavior; override individual fields
//! with struct-update syntax.

use crate::encoding::DEFAULT_META_SNIFF_LIMIT;

/// Tags stripped before candidate scoring, regardless of their text.
pub const DEFAULT_NOISE_TAGS: &[&str] = &[
    "script", "style", "noscript", "nav", "footer", "header", "aside",
];

/// Configuration options for content extraction.
///
/// # Example
///
/// ```rust
/// use rs_readable::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_candidate_len: 40,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Number of leading bytes scanned for an in-document `charset=`.
    ///
    /// The declaration is expected near the top of `<head>`, so scanning the
    /// whole document is wasted work.
    ///
    /// Default: `4096`
    pub meta_sniff_limit: usize,

    /// Candidates whose trimmed text has at most this many characters are
    /// skipped.
    ///
    /// Default: `10`
    pub min_candidate_len: usize,

    /// Upper bound on the link-density penalty.
    ///
    /// A candidate made only of anchor text keeps `1 - cap` of its score.
    ///
    /// Default: `0.8`
    pub link_density_cap: f64,

    /// Tag names removed from the document before scoring.
    ///
    /// Default: `script`, `style`, `noscript`, `nav`, `footer`, `header`, `aside`
    pub noise_tags: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            meta_sniff_limit: DEFAULT_META_SNIFF_LIMIT,
            min_candidate_len: 10,
            link_density_cap: 0.8,
            noise_tags: DEFAULT_NOISE_TAGS.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}
