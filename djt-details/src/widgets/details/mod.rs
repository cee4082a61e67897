//! Details widget - backward-compatible disclosure element.
//!
//! Provides the behavior of the native `details`/`summary` disclosure
//! element on environments with and without native support. On first
//! mount the widget probes the backing node for a boolean-typed "open"
//! property; environments without one are latched as unsupported and the
//! widget re-renders into a synthesized container with manual visibility
//! toggling.
//!
//! # Example
//!
//! ```ignore
//! let support = NativeSupport::new();
//! let details = Details::with_support(
//!     DetailsProps::new()
//!         .summary("More information")
//!         .content("<p>The fine print.</p>"),
//!     support.clone(),
//! );
//!
//! details.mounted(Some(&mut node))?;
//! let output = details.render();
//! ```

mod events;
mod render;
mod state;

pub use render::{RenderOutput, RenderStrategy};
pub use state::{DetailsId, DetailsState};
pub use state::{CLOSED_CLASS, NON_NATIVE_CONTAINER_CLASS, NON_NATIVE_SUMMARY_CLASS, OPENED_CLASS};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use djt_dom::DomNode;
use log::debug;

use crate::error::DetailsError;
use crate::markup::DETAILS_NODE_NAME;
use crate::props::DetailsProps;
use crate::registration::{Component, ComponentRegistration};
use crate::support::NativeSupport;
use crate::widgets::html_content::HtmlContent;
use crate::widgets::summary::SummaryHtmlContent;

/// Static component name, also the tag the widget renders under when it
/// wraps its own markup in a server-side pass.
pub const COMPONENT_NAME: &str = "djt-details";

/// Disclosure widget.
///
/// Cheap to clone; clones share the same state. State is derived from
/// props once at construction and owned by the widget afterwards.
#[derive(Debug)]
pub struct Details {
    id: DetailsId,
    /// Identifier applied to the rendered or attached element.
    element_id: String,
    state: Arc<RwLock<DetailsState>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    support: NativeSupport,
    /// Node name of the pre-existing markup root, when attached to one.
    original_root: Option<String>,
    summary_node: SummaryHtmlContent,
    content_node: HtmlContent,
}

impl Details {
    /// Create a widget with a private support latch.
    pub fn new(props: DetailsProps) -> Self {
        Self::with_support(props, NativeSupport::new())
    }

    /// Create a widget sharing the given support latch.
    ///
    /// Hosts mounting more than one disclosure widget should clone one
    /// latch into all of them so the probe runs only once.
    pub fn with_support(props: DetailsProps, support: NativeSupport) -> Self {
        let id = DetailsId::new();
        let element_id = props.id.clone().unwrap_or_else(|| id.to_string());
        let state = DetailsState::derive(&props, &support);

        let summary_node = SummaryHtmlContent::new(&state.summary)
            .with_pointer_down(format!("{element_id}-toggle"));
        let content_node = HtmlContent::new(&state.content);

        Self {
            id,
            element_id,
            state: Arc::new(RwLock::new(state)),
            dirty: Arc::new(AtomicBool::new(false)),
            support,
            original_root: props.original_element_data.map(|data| data.name),
            summary_node,
            content_node,
        }
    }

    /// Node names whose raw inner HTML the external parser should deliver
    /// unparsed when building pre-existing markup for this widget.
    pub fn markup_nodes_with_inline_html() -> &'static [&'static str] {
        &["div", "summary"]
    }

    /// Get the unique ID for this widget.
    pub fn id(&self) -> DetailsId {
        self.id
    }

    /// Get the ID as a string (for node binding and events).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Identifier applied to the rendered or attached element.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Get a snapshot of the current state.
    pub fn state(&self) -> DetailsState {
        self.state
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Whether the body is currently shown.
    pub fn is_visible(&self) -> bool {
        self.state().is_visible
    }

    /// Whether native-element mode is active.
    pub fn is_native_implementation(&self) -> bool {
        self.state().is_native_implementation
    }

    /// The shared support latch.
    pub fn support(&self) -> &NativeSupport {
        &self.support
    }

    /// Whether the widget attached to a pre-existing native disclosure
    /// element, as opposed to rendering a fresh one.
    pub fn is_original_details_element(&self) -> bool {
        !self.support.is_unsupported()
            && self
                .original_root
                .as_deref()
                .is_some_and(|name| name == DETAILS_NODE_NAME)
    }

    /// Mount hook: probe the environment for native disclosure support.
    ///
    /// `node` is the live node backing this widget, either the original
    /// disclosure element or a freshly rendered one, resolved by the host.
    /// The probe runs once per support latch; widgets mounted after it has
    /// resolved skip probing. When support is confirmed and the widget is
    /// meant to be visible, the open property is written directly so the
    /// content doesn't flash closed while the host's diff catches up.
    ///
    /// In fallback mode no node is needed. In native mode a missing node
    /// means the host has no DOM to probe, which is an error.
    pub fn mounted(&self, node: Option<&mut dyn DomNode>) -> Result<(), DetailsError> {
        if !self.is_native_implementation() {
            return Ok(());
        }

        let Some(node) = node else {
            return Err(DetailsError::MissingBackingNode);
        };

        if self.is_original_details_element() {
            node.set_attribute("id", &self.element_id);
        }

        if !self.support.is_resolved() {
            let supported = node.open_state().is_some();
            self.support.resolve(supported);

            if !supported {
                debug!(
                    "{}: native details unsupported, downgrading to fallback markup",
                    self.element_id
                );
                if let Ok(mut state) = self.state.write() {
                    state.is_native_implementation = false;
                }
                self.dirty.store(true, Ordering::SeqCst);
                return Ok(());
            }
        }

        if self.support.get() == Some(true) && self.is_visible() {
            node.set_open(true);
        }

        Ok(())
    }

    /// Replace the body HTML.
    pub fn set_content(&self, content: impl Into<String>) {
        let content = content.into();
        if let Ok(mut guard) = self.state.write()
            && guard.content != content
        {
            guard.content = content;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Replace the summary HTML.
    pub fn set_summary(&self, summary: impl Into<String>) {
        let summary = summary.into();
        if let Ok(mut guard) = self.state.write()
            && guard.summary != summary
        {
            guard.summary = summary;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Update hook: push changed content or summary into the child
    /// renderers.
    ///
    /// The renderers inject HTML themselves rather than going through the
    /// host's diff, so a content change is handed to them imperatively and
    /// a pure visibility change leaves the injected HTML untouched.
    pub fn updated(&self) {
        let state = self.state();

        if self.content_node.content() != state.content {
            self.content_node.set_content(&state.content);
        }
        if self.summary_node.content() != state.summary {
            self.summary_node.set_content(&state.summary);
        }
    }

    /// Handle of the summary renderer.
    pub fn summary_node(&self) -> &SummaryHtmlContent {
        &self.summary_node
    }

    /// Handle of the body renderer.
    pub fn content_node(&self) -> &HtmlContent {
        &self.content_node
    }

    /// Check if the widget state has changed and needs re-render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub(crate) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub(crate) fn write_state(&self, f: impl FnOnce(&mut DetailsState)) {
        if let Ok(mut guard) = self.state.write() {
            f(&mut guard);
        }
    }
}

impl Clone for Details {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            element_id: self.element_id.clone(),
            state: Arc::clone(&self.state),
            dirty: Arc::clone(&self.dirty),
            support: self.support.clone(),
            original_root: self.original_root.clone(),
            summary_node: self.summary_node.clone(),
            content_node: self.content_node.clone(),
        }
    }
}

impl Default for Details {
    fn default() -> Self {
        Self::new(DetailsProps::default())
    }
}

impl Component for Details {
    fn component_name(&self) -> &'static str {
        COMPONENT_NAME
    }
}

fn details_factory() -> Box<dyn Component> {
    Box::new(Details::default())
}

inventory::submit! {
    ComponentRegistration::new(COMPONENT_NAME, details_factory)
}
