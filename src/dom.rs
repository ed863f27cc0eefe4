//! Owned document model.
//!
//! HTML is parsed with the `dom_query` crate (html5ever underneath, so tag
//! soup is tolerated, mismatched tags are auto-closed and tag names are
//! lower-cased) and then copied into a flat arena. Nodes are addressed by
//! [`NodeId`]; parent and children are stored as ids, so the tree has a
//! single owner and no reference cycles.

use std::collections::BTreeMap;

use url::Url;

/// Index of a node inside its [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root. Always at index 0.
    Document,
    /// An element with its lower-cased tag name and attributes.
    Element {
        tag: String,
        attrs: BTreeMap<String, String>,
    },
    /// A run of character data.
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Elements that separate words when flattening text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section",
    "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// A parsed HTML document stored as an arena of nodes.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    base_url: Url,
}

/// Parse HTML text into a [`Document`].
///
/// Comments, doctypes and processing instructions are dropped; only the
/// root, elements and text survive.
///
/// ```
/// use rs_readable::dom;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/")?;
/// let doc = dom::parse("<DIV id=x>Hello <b>world</b></DIV>", &base);
/// let div = doc.select(doc.root(), &["div"])[0];
/// assert_eq!(doc.tag_name(div), Some("div"));
/// assert_eq!(doc.attr(div, "id"), Some("x"));
/// assert_eq!(doc.text(div), "Hello world");
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn parse(html: &str, base_url: &Url) -> Document {
    let source = dom_query::Document::from(html);
    let mut doc = Document::new(base_url.clone());

    let mut stack = Vec::new();
    push_children_reversed(&mut stack, source.root(), doc.root());

    while let Some((node, parent)) = stack.pop() {
        if node.is_element() {
            let tag = node
                .node_name()
                .map(|t| t.to_ascii_lowercase())
                .unwrap_or_default();
            let attrs = node
                .attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            let id = doc.append(parent, NodeKind::Element { tag, attrs });
            push_children_reversed(&mut stack, node, id);
        } else if node.is_text() {
            doc.append(parent, NodeKind::Text(node.text().to_string()));
        }
    }

    tracing::trace!(nodes = doc.len(), "parsed document");
    doc
}

fn push_children_reversed<'a>(
    stack: &mut Vec<(dom_query::NodeRef<'a>, NodeId)>,
    node: dom_query::NodeRef<'a>,
    parent: NodeId,
) {
    let mut children: Vec<_> = node.children().into_iter().collect();
    children.reverse();
    stack.extend(children.into_iter().map(|child| (child, parent)));
}

impl Document {
    fn new(base_url: Url) -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
            base_url,
        }
    }

    fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The document root.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// URL the document was parsed against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Number of nodes in the arena, detached ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root node is present from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Payload of `id`, or `None` if `id` is not from this document.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|n| &n.kind)
    }

    /// Lower-cased tag name, `None` for text and the root.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            _ => None,
        }
    }

    /// Parent node; `None` for the root, detached nodes and unknown ids.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Ordered child nodes, text included.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map_or(&[], |n| n.children.as_slice())
    }

    /// Descendants of `id` in document order, excluding `id` itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    /// Descendant elements whose tag name is one of `tags`, in document order.
    #[must_use]
    pub fn select(&self, id: NodeId, tags: &[&str]) -> Vec<NodeId> {
        self.descendants(id)
            .filter(|&d| self.tag_name(d).is_some_and(|t| tags.contains(&t)))
            .collect()
    }

    /// Detach `id` (and its subtree) from its parent.
    ///
    /// The nodes stay in the arena but are no longer reachable from the root.
    pub fn remove(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get_mut(id.0).and_then(|n| n.parent.take()) else {
            return;
        };
        self.nodes[parent.0].children.retain(|&c| c != id);
    }

    /// Concatenation of every descendant text node, verbatim.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(NodeKind::Text(text)) = self.kind(id) {
            out.push_str(text);
        }
        for d in self.descendants(id) {
            if let Some(NodeKind::Text(text)) = self.kind(d) {
                out.push_str(text);
            }
        }
        out
    }

    /// Flattened, whitespace-normalized text of `id`.
    ///
    /// Block boundaries and `<br>` separate words; runs of whitespace become
    /// one space and the result is trimmed.
    #[must_use]
    pub fn text(&self, id: NodeId) -> String {
        self.try_text(id).unwrap_or_default()
    }

    /// Like [`Document::text`], but `None` when `id` is not from this
    /// document.
    #[must_use]
    pub fn try_text(&self, id: NodeId) -> Option<String> {
        self.kind(id)?;

        enum Visit {
            Enter(NodeId),
            Exit,
        }

        let mut raw = String::new();
        let mut stack = vec![Visit::Enter(id)];
        while let Some(visit) = stack.pop() {
            let Visit::Enter(node) = visit else {
                raw.push(' ');
                continue;
            };
            match &self.nodes[node.0].kind {
                NodeKind::Text(text) => raw.push_str(text),
                NodeKind::Element { tag, .. } if BLOCK_TAGS.contains(&tag.as_str()) => {
                    raw.push(' ');
                    stack.push(Visit::Exit);
                    stack.extend(self.children(node).iter().rev().map(|&c| Visit::Enter(c)));
                }
                _ => stack.extend(self.children(node).iter().rev().map(|&c| Visit::Enter(c))),
            }
        }

        Some(raw.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    /// Text of the first `<title>` element, or an empty string.
    #[must_use]
    pub fn title(&self) -> String {
        self.select(self.root(), &["title"])
            .first()
            .map(|&t| self.text(t))
            .unwrap_or_default()
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.doc.children(id).iter().rev());
        Some(id)
    }
}
