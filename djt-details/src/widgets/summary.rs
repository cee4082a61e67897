//! Summary-slot specialization of the dynamic HTML content renderer.
//!
//! Identical behavior to [`HtmlContent`], differing only in the tag used
//! when attaching to pre-existing markup and in its registered name.

use djt_dom::{Element, Tag};

use crate::registration::{Component, ComponentRegistration};
use crate::widgets::html_content::HtmlContent;

/// Static component name of the summary renderer.
pub const COMPONENT_NAME: &str = "djt-dynamic-summary-html-content";

/// Dynamic HTML content renderer for the summary slot.
#[derive(Debug, Clone, Default)]
pub struct SummaryHtmlContent {
    inner: HtmlContent,
}

impl SummaryHtmlContent {
    /// Create a renderer for the given summary HTML.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            inner: HtmlContent::new(content),
        }
    }

    /// Set the class name applied to the rendered node.
    pub fn with_class_name(self, class_name: impl Into<String>) -> Self {
        Self {
            inner: self.inner.with_class_name(class_name),
        }
    }

    /// Set the handler ID dispatched on pointer-down.
    pub fn with_pointer_down(self, handler_id: impl Into<String>) -> Self {
        Self {
            inner: self.inner.with_pointer_down(handler_id),
        }
    }

    /// Get the current summary HTML.
    pub fn content(&self) -> String {
        self.inner.content()
    }

    /// Replace the rendered summary HTML imperatively.
    pub fn set_content(&self, content: impl Into<String>) {
        self.inner.set_content(content);
    }

    /// Produce the renderable node.
    pub fn element(&self) -> Element {
        self.inner.element_with_tag(self.attaching_tag())
    }

    /// Tag used when the renderer attaches to pre-existing markup.
    pub fn attaching_tag(&self) -> Tag {
        Tag::Summary
    }

    /// Access the underlying generic renderer.
    pub fn as_html_content(&self) -> &HtmlContent {
        &self.inner
    }

    /// Check if the summary has changed since last render.
    pub fn is_dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.inner.clear_dirty();
    }
}

impl Component for SummaryHtmlContent {
    fn component_name(&self) -> &'static str {
        COMPONENT_NAME
    }
}

fn summary_content_factory() -> Box<dyn Component> {
    Box::new(SummaryHtmlContent::default())
}

inventory::submit! {
    ComponentRegistration::new(COMPONENT_NAME, summary_content_factory)
}
