//! Dynamic HTML content renderer.
//!
//! Renders an arbitrary HTML string into a single node. The content is
//! injected by the renderer itself rather than diffed by the host, so the
//! owning widget pushes new content through [`HtmlContent::set_content`]
//! directly instead of re-rendering when only the HTML changed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use djt_dom::{Element, Tag};

use crate::registration::{Component, ComponentRegistration};

/// Static component name of the generic renderer.
pub const COMPONENT_NAME: &str = "djt-dynamic-html-content";

#[derive(Debug, Default)]
struct HtmlContentInner {
    /// HTML string injected into the node.
    content: String,
    /// Class name applied to the node, when set.
    class_name: Option<String>,
    /// Handler ID dispatched on pointer-down, when set.
    pointer_down_handler: Option<String>,
}

/// Generic dynamic-HTML content renderer with reactive content.
///
/// Cheap to clone; clones share the same content state, so a parent widget
/// can keep a handle and update the rendered HTML imperatively.
#[derive(Debug, Default)]
pub struct HtmlContent {
    inner: Arc<RwLock<HtmlContentInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl HtmlContent {
    /// Create a renderer for the given HTML string.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HtmlContentInner {
                content: content.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the class name applied to the rendered node.
    pub fn with_class_name(self, class_name: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.class_name = Some(class_name.into());
        }
        self
    }

    /// Set the handler ID dispatched on pointer-down.
    pub fn with_pointer_down(self, handler_id: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.pointer_down_handler = Some(handler_id.into());
        }
        self
    }

    /// Get the current HTML string.
    pub fn content(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.content.clone())
            .unwrap_or_default()
    }

    /// Get the class name, if set.
    pub fn class_name(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.class_name.clone())
            .unwrap_or(None)
    }

    /// Replace the rendered HTML imperatively, bypassing the host's diff.
    pub fn set_content(&self, content: impl Into<String>) {
        let content = content.into();
        if let Ok(mut guard) = self.inner.write()
            && guard.content != content
        {
            guard.content = content;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Produce the renderable node.
    pub fn element(&self) -> Element {
        self.element_with_tag(self.attaching_tag())
    }

    /// Tag used when the renderer attaches to pre-existing markup.
    pub fn attaching_tag(&self) -> Tag {
        Tag::Div
    }

    pub(crate) fn element_with_tag(&self, tag: Tag) -> Element {
        let Ok(guard) = self.inner.read() else {
            return Element::with_tag(tag);
        };

        let mut element = Element::with_tag(tag).html(guard.content.clone());

        if let Some(class_name) = &guard.class_name {
            element = element.class_name(class_name.clone());
        }
        if let Some(handler_id) = &guard.pointer_down_handler {
            element = element.handler("on_pointer_down", handler_id.clone());
        }

        element
    }

    /// Check if the content has changed since last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for HtmlContent {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Component for HtmlContent {
    fn component_name(&self) -> &'static str {
        COMPONENT_NAME
    }
}

fn html_content_factory() -> Box<dyn Component> {
    Box::new(HtmlContent::default())
}

inventory::submit! {
    ComponentRegistration::new(COMPONENT_NAME, html_content_factory)
}
