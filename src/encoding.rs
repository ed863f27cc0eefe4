//! Character encoding detection and decoding.
//!
//! Raw response bytes are resolved to text by a strict cascade of signals,
//! cheapest and most trustworthy first:
//!
//! 1. a byte-order mark (`EF BB BF`, `FE FF`, `FF FE`)
//! 2. the `charset=` parameter of the transport `Content-Type` header
//! 3. a `charset=` declaration in the first bytes of the document
//! 4. UTF-8
//!
//! The first signal whose decoder accepts the whole byte sequence wins.
//! Signals are never merged. Unknown charset labels count as a miss, and so
//! does a decoder rejecting the bytes, so a later step gets its chance.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

use crate::{Error, Options, Result};

/// Default number of leading bytes scanned for an in-document charset.
pub const DEFAULT_META_SNIFF_LIMIT: usize = 4096;

/// Match a `charset=` declaration anywhere in the document head.
///
/// The name is the run of letters, digits, `-` and `.` following it. An
/// opening quote is skipped so `<meta charset="utf-8">` resolves too.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset=["']?([A-Za-z0-9.\-]*)"#).expect("valid regex")
});

/// Which signal produced a [`DecodedDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeSource {
    /// Leading byte-order mark.
    ByteOrderMark,
    /// `charset=` parameter of the transport content type.
    TransportHeader,
    /// `charset=` found near the top of the document.
    MetaTag,
    /// No usable signal; decoded as UTF-8.
    Utf8Fallback,
}

/// Text decoded from raw bytes, together with the encoding that produced it.
///
/// Never built from bytes the chosen decoder rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    /// The decoded text, without any byte-order mark.
    pub text: String,

    /// Encoding used to decode `text`.
    pub encoding: &'static Encoding,

    /// Signal that selected `encoding`.
    pub source: DecodeSource,
}

/// Decode raw bytes using the default sniff limit.
///
/// # Errors
///
/// Returns [`Error::CharsetDetectionFailed`] when no step of the cascade
/// yields valid text.
///
/// # Examples
///
/// ```
/// use rs_readable::encoding::{decode, DecodeSource};
///
/// let bytes = b"<html><body>Caf\xE9</body></html>";
/// let decoded = decode(bytes, Some("text/html; charset=iso-8859-1"))?;
/// assert!(decoded.text.contains("Café"));
/// assert_eq!(decoded.source, DecodeSource::TransportHeader);
/// # Ok::<(), rs_readable::Error>(())
/// ```
pub fn decode(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedDocument> {
    decode_with_options(bytes, content_type, &Options::default())
}

/// Decode raw bytes, scanning `options.meta_sniff_limit` bytes for an
/// in-document charset.
///
/// # Errors
///
/// Returns [`Error::CharsetDetectionFailed`] when no step of the cascade
/// yields valid text.
pub fn decode_with_options(
    bytes: &[u8],
    content_type: Option<&str>,
    options: &Options,
) -> Result<DecodedDocument> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        if let Some(doc) = attempt(encoding, &bytes[bom_len..], DecodeSource::ByteOrderMark) {
            return Ok(doc);
        }
    }

    if let Some(encoding) = content_type
        .and_then(charset_from_content_type)
        .and_then(lookup_charset)
    {
        if let Some(doc) = attempt(encoding, bytes, DecodeSource::TransportHeader) {
            return Ok(doc);
        }
    }

    if let Some(encoding) = sniff_meta_charset(bytes, options.meta_sniff_limit)
        .as_deref()
        .and_then(lookup_charset)
    {
        if let Some(doc) = attempt(encoding, bytes, DecodeSource::MetaTag) {
            return Ok(doc);
        }
    }

    attempt(UTF_8, bytes, DecodeSource::Utf8Fallback).ok_or_else(|| {
        tracing::debug!(len = bytes.len(), "no decoder accepted the document");
        Error::CharsetDetectionFailed
    })
}

/// Extract the `charset` parameter from a `Content-Type` header value.
///
/// Parameters are `;`-delimited and matched case-insensitively; surrounding
/// whitespace and quotes are dropped.
///
/// ```
/// use rs_readable::encoding::charset_from_content_type;
///
/// assert_eq!(charset_from_content_type("text/html; Charset=\"UTF-8\""), Some("UTF-8"));
/// assert_eq!(charset_from_content_type("text/html"), None);
/// ```
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    content_type.split(';').map(str::trim).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'').trim();
        (!value.is_empty()).then_some(value)
    })
}

/// Scan the first `limit` bytes for a `charset=` declaration.
///
/// The head is read as ASCII; any other byte becomes U+FFFD and cannot be
/// part of a charset name.
#[must_use]
pub fn sniff_meta_charset(bytes: &[u8], limit: usize) -> Option<String> {
    let head: String = bytes[..bytes.len().min(limit)]
        .iter()
        .map(|&b| if b.is_ascii() { char::from(b) } else { char::REPLACEMENT_CHARACTER })
        .collect();

    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Resolve a charset label to a decoder, per the WHATWG label table.
fn lookup_charset(label: &str) -> Option<&'static Encoding> {
    let encoding = Encoding::for_label(label.as_bytes());
    if encoding.is_none() {
        tracing::trace!(label, "unknown charset label");
    }
    encoding
}

/// Strictly decode `bytes`, returning `None` on any malformed sequence.
fn attempt(
    encoding: &'static Encoding,
    bytes: &[u8],
    source: DecodeSource,
) -> Option<DecodedDocument> {
    let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) else {
        tracing::debug!(?source, encoding = encoding.name(), "decoder rejected bytes");
        return None;
    };

    tracing::debug!(?source, encoding = encoding.name(), len = text.len(), "decoded document");
    Some(DecodedDocument {
        text: Cow::into_owned(text),
        encoding,
        source,
    })
}
