//! Rendering for the Details widget.
//!
//! Each pass selects a strategy from current state and produces the same
//! contract regardless of variant: a renderable node list plus the direct
//! patches to apply to the backing node.

use djt_dom::{DomPatch, Element};

use super::{Details, DetailsState};

/// Rendering strategy selected from current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Native mode, attached to a pre-existing disclosure element: render
    /// the flat summary/body pair and patch the existing node's classes.
    NativeAttached,
    /// Native mode with no pre-existing element: wrap the pair in a fresh
    /// disclosure element.
    NativeOwned,
    /// Synthesized container with manual visibility styling.
    Fallback,
}

impl RenderStrategy {
    /// Select the strategy for the given state.
    pub fn select(state: &DetailsState, attached_to_details: bool) -> Self {
        if !state.is_native_implementation {
            Self::Fallback
        } else if attached_to_details {
            Self::NativeAttached
        } else {
            Self::NativeOwned
        }
    }
}

/// Output of one render pass.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub strategy: RenderStrategy,
    /// Renderable tree. A flat pair when attached (the wrapping tag
    /// already exists in the backing store), a single root otherwise.
    pub nodes: Vec<Element>,
    /// Direct mutations for the backing node, outside the declarative
    /// output.
    pub patches: Vec<DomPatch>,
}

impl Details {
    /// Produce the renderable tree and backing-node patches for the
    /// current state.
    pub fn render(&self) -> RenderOutput {
        let state = self.state();

        match RenderStrategy::select(&state, self.is_original_details_element()) {
            RenderStrategy::NativeAttached => self.render_native_attached(&state),
            RenderStrategy::NativeOwned => self.render_native_owned(&state),
            RenderStrategy::Fallback => self.render_fallback(&state),
        }
    }

    fn visibility_class(state: &DetailsState) -> &str {
        if state.is_visible {
            &state.opened_class
        } else {
            &state.closed_class
        }
    }

    fn render_native_attached(&self, state: &DetailsState) -> RenderOutput {
        let nodes = vec![self.summary_node().element(), self.content_node().element()];

        // The wrapping element already exists in the backing store; its
        // class list is rewritten in place, exactly one of opened/closed.
        let patches = vec![DomPatch::ReplaceClasses {
            exclude: vec![state.opened_class.clone(), state.closed_class.clone()],
            prepend: Self::visibility_class(state).to_string(),
        }];

        RenderOutput {
            strategy: RenderStrategy::NativeAttached,
            nodes,
            patches,
        }
    }

    fn render_native_owned(&self, state: &DetailsState) -> RenderOutput {
        let details = Element::details()
            .id(self.element_id())
            .class_name(Self::visibility_class(state))
            .children(vec![
                self.summary_node().element(),
                self.content_node().element(),
            ]);

        RenderOutput {
            strategy: RenderStrategy::NativeOwned,
            nodes: vec![details],
            patches: Vec::new(),
        }
    }

    fn render_fallback(&self, state: &DetailsState) -> RenderOutput {
        // The summary slot uses the generic renderer here: there is no
        // native summary element to attach to in fallback markup.
        let summary = self
            .summary_node()
            .as_html_content()
            .element()
            .class_name(state.non_native_summary_class.clone());

        // Hidden, not removed: scripts and tests still see the content.
        let body = self
            .content_node()
            .element()
            .hidden(!state.is_visible);

        let container = Element::div()
            .id(self.element_id())
            .class_name(format!(
                "{} {}",
                state.non_native_container_class,
                Self::visibility_class(state)
            ))
            .children(vec![summary, body]);

        RenderOutput {
            strategy: RenderStrategy::Fallback,
            nodes: vec![container],
            patches: Vec::new(),
        }
    }
}
