//! Pre-existing markup handed over by an external parser.
//!
//! When a widget takes over a node that already has server-rendered or
//! static markup, the host's parser delivers that markup as a tree of
//! named nodes. The tree is read-only input; nothing here parses text.

/// One node of already-parsed pre-existing markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupNode {
    /// Lower-case node name ("details", "summary", "p", ...).
    pub name: String,
    /// Raw inner HTML of the node.
    pub html: String,
    /// Direct children, in document order.
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_html(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html: html.into(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: Vec<MarkupNode>) -> Self {
        self.children = children;
        self
    }
}
