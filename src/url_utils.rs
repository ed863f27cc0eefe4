//! URL resolution for links found in content.

use url::Url;

/// Resolve an `href` attribute against the document's base URL.
///
/// Returns the absolute URL when the value can be joined onto `base`, and the
/// raw attribute value otherwise. An empty or blank `href` is returned as-is
/// rather than resolving to the base URL itself.
///
/// # Examples
///
/// ```
/// use rs_readable::url_utils::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/news/today")?;
/// assert_eq!(resolve_href("/link", &base), "https://example.com/link");
/// assert_eq!(resolve_href("more", &base), "https://example.com/news/more");
/// assert_eq!(resolve_href("mailto:a@b.c", &base), "mailto:a@b.c");
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn resolve_href(href: &str, base: &Url) -> String {
    let trimmed = href.trim();
    if trimmed.is_empty() {
        return href.to_string();
    }

    match base.join(trimmed) {
        Ok(resolved) => resolved.to_string(),
        Err(err) => {
            tracing::trace!(href, error = %err, "href left unresolved");
            href.to_string()
        }
    }
}
