//! Markdown rendering of the selected content subtree.
//!
//! Block-level traversal is depth-first and pre-order. Each tag maps to a
//! [`BlockRule`]; the content of paragraphs, list items and blockquotes is
//! rendered one level deep through [`InlineRule`]. `code` therefore has two
//! renderings: a fenced block when met at block level, backticks when met
//! inside an inline context.

use url::Url;

use crate::dom::{Document, NodeId, NodeKind};
use crate::url_utils::resolve_href;
use crate::{Error, Result};

/// How an element is rendered at block level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRule {
    /// `#` repeated `level` times, then the flattened text.
    Heading(usize),
    /// One line of inline-rendered content.
    Inline,
    /// Literal text inside triple-backtick fences.
    Fenced,
    /// No line of its own; children are visited in order.
    Container,
}

impl BlockRule {
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Self::Heading(heading_level(tag)),
            "p" | "li" | "blockquote" => Self::Inline,
            "pre" | "code" => Self::Fenced,
            _ => Self::Container,
        }
    }
}

/// How a child element is rendered inside an inline context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    /// `[text](resolved href)`
    Link,
    /// `**text**`
    Strong,
    /// `_text_`
    Emphasis,
    /// `` `text` ``
    Code,
    /// A literal newline.
    LineBreak,
    /// The element's flattened text.
    Flatten,
}

impl InlineRule {
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "a" => Self::Link,
            "strong" | "b" => Self::Strong,
            "em" | "i" => Self::Emphasis,
            "code" => Self::Code,
            "br" => Self::LineBreak,
            _ => Self::Flatten,
        }
    }
}

/// Heading level from the numeric suffix of `h1`..`h6`, at least 1.
///
/// Falls back to 1 when the suffix does not parse.
#[must_use]
pub fn heading_level(tag: &str) -> usize {
    tag.get(1..)
        .and_then(|digits| digits.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1)
}

/// Render the subtree at `root` to markdown.
///
/// # Errors
///
/// Returns [`Error::EmptyContent`] when the output is blank after trimming.
///
/// # Examples
///
/// ```
/// use rs_readable::{dom, markdown};
/// use url::Url;
///
/// let base = Url::parse("https://example.com/news")?;
/// let doc = dom::parse(r#"<div><h2>Title</h2><p>See <a href="/x">this</a>.</p></div>"#, &base);
/// let div = doc.select(doc.root(), &["div"])[0];
/// let md = markdown::render(&doc, div, &base)?;
/// assert_eq!(md, "## Title\n\nSee [this](https://example.com/x).\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render(doc: &Document, root: NodeId, base_url: &Url) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        match doc.kind(id) {
            Some(NodeKind::Element { tag, .. }) => match BlockRule::for_tag(tag) {
                BlockRule::Heading(level) => {
                    lines.push(format!("{} {}", "#".repeat(level), doc.text(id)));
                    lines.push(String::new());
                }
                BlockRule::Inline => {
                    let text = render_inline(doc, id, base_url);
                    if !text.trim().is_empty() {
                        lines.push(text);
                        lines.push(String::new());
                    }
                }
                BlockRule::Fenced => {
                    lines.push(format!("```\n{}\n```", doc.text_content(id)));
                    lines.push(String::new());
                }
                BlockRule::Container => stack.extend(doc.children(id).iter().rev()),
            },
            Some(NodeKind::Text(text)) => {
                let text = collapse_whitespace(text);
                let text = text.trim();
                if !text.is_empty() {
                    lines.push(text.to_string());
                }
            }
            Some(NodeKind::Document) => stack.extend(doc.children(id).iter().rev()),
            None => {}
        }
    }

    let markdown = collapse_blank_lines(lines.as_slice());
    if markdown.trim().is_empty() {
        tracing::debug!(lines = lines.len(), "rendered markdown is blank");
        return Err(Error::EmptyContent);
    }
    Ok(markdown)
}

/// Render the direct children of `id` as one line of inline markdown.
///
/// Text nodes keep their spacing (whitespace runs collapse to one space);
/// element children are flattened one level deep.
#[must_use]
pub fn render_inline(doc: &Document, id: NodeId, base_url: &Url) -> String {
    let mut out = String::new();

    for &child in doc.children(id) {
        match doc.kind(child) {
            Some(NodeKind::Text(text)) => out.push_str(&collapse_whitespace(text)),
            Some(NodeKind::Element { tag, attrs }) => match InlineRule::for_tag(tag) {
                InlineRule::Link => {
                    let href = attrs.get("href").map_or("", String::as_str);
                    out.push_str(&format!(
                        "[{}]({})",
                        doc.text(child),
                        resolve_href(href, base_url)
                    ));
                }
                InlineRule::Strong => out.push_str(&format!("**{}**", doc.text(child))),
                InlineRule::Emphasis => out.push_str(&format!("_{}_", doc.text(child))),
                InlineRule::Code => out.push_str(&format!("`{}`", doc.text(child))),
                InlineRule::LineBreak => out.push('\n'),
                // Best effort: a child whose text cannot be read contributes nothing.
                InlineRule::Flatten => out.push_str(&doc.try_text(child).unwrap_or_default()),
            },
            _ => {}
        }
    }

    out
}

/// Collapse runs of blank lines to a single empty line and join with `\n`.
///
/// ```
/// use rs_readable::markdown::collapse_blank_lines;
///
/// let lines = ["a", "", "  ", "", "b", ""];
/// assert_eq!(collapse_blank_lines(&lines[..]), "a\n\nb\n");
/// ```
#[must_use]
pub fn collapse_blank_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut result: Vec<&str> = Vec::with_capacity(lines.len());
    let mut blank = false;

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            if !blank {
                result.push("");
            }
            blank = true;
        } else {
            result.push(line);
            blank = false;
        }
    }

    result.join("\n")
}

/// Replace each run of whitespace with a single space, keeping the ends.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}
