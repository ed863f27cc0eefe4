//! Error types for rs-readable.
//!
//! Every pipeline stage fails fast with one of these variants. None of them is
//! retried internally; the caller decides whether to skip, log or refetch.

/// Error type for extraction operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No decoding strategy (BOM, transport header, meta sniff, UTF-8
    /// fallback) produced valid text.
    #[error("character encoding detection failed")]
    CharsetDetectionFailed,

    /// No candidate element met the minimum text length, or the document
    /// contained no candidate tags at all.
    #[error("no main content candidate found")]
    ContentParseFailed,

    /// A candidate was selected but rendered to blank markdown.
    #[error("selected content rendered empty")]
    EmptyContent,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
