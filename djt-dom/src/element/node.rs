use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tag an element is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// Native disclosure container.
    Details,
    /// Clickable header slot of a disclosure container.
    Summary,
    /// Generic block container.
    Div,
    Custom(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Details => "details",
            Self::Summary => "summary",
            Self::Div => "div",
            Self::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the renderable tree a widget produces.
///
/// Elements are plain data; a host applies them to its backing store.
/// Visibility is a paint property: a hidden element stays in the tree and
/// keeps its content, it just isn't painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Visual
    pub class_name: String,
    pub hidden: bool,

    // Content
    pub content: Content,

    // Plain attributes applied to the backing node
    pub attributes: HashMap<String, String>,

    // Custom data storage (for handler IDs, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            class_name: String::new(),
            hidden: false,
            content: Content::None,
            attributes: HashMap::new(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            tag: Tag::Div,
            ..Default::default()
        }
    }

    pub fn details() -> Self {
        Self {
            id: generate_id("details"),
            tag: Tag::Details,
            ..Default::default()
        }
    }

    pub fn summary() -> Self {
        Self {
            id: generate_id("summary"),
            tag: Tag::Summary,
            ..Default::default()
        }
    }

    pub fn custom(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag: Tag::Custom(tag),
            ..Default::default()
        }
    }

    /// Create an element with the given tag.
    pub fn with_tag(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.as_str()),
            tag,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Visual
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Content
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.content = Content::Html(html.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    // Attributes and handler data
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Attach a handler ID under the given event name.
    ///
    /// Hosts dispatch back through the ID rather than a stored closure.
    pub fn handler(mut self, event: impl Into<String>, handler_id: impl Into<String>) -> Self {
        self.data.insert(event.into(), handler_id.into());
        self
    }
}
