//! Live-DOM node abstraction and side-channel patches.
//!
//! Widgets produce a renderable [`Element`](crate::Element) tree through the
//! normal declarative path, but some mutations have to land on the backing
//! node directly: class-list rewrites that must not wait for a diff pass,
//! and the native disclosure "open" property. Those travel as [`DomPatch`]
//! values applied through the [`DomNode`] trait.

use log::trace;

use crate::class::filtered_and_prepended;

/// A live node in the host's backing store.
///
/// The host owns the real node; widgets only see this trait. Nodes without
/// native disclosure support report `None` from [`DomNode::open_state`].
pub trait DomNode {
    /// Lower-case node name.
    fn node_name(&self) -> String;

    /// The boolean-typed "open" property, when the node exposes one.
    ///
    /// `None` means the property does not exist on this node, which is the
    /// signal that the environment lacks native disclosure support.
    fn open_state(&self) -> Option<bool>;

    /// Write the "open" property directly.
    fn set_open(&mut self, open: bool);

    /// Current whitespace-separated class string.
    fn class_name(&self) -> String;

    /// Replace the whole class string.
    fn set_class_name(&mut self, class_name: &str);

    /// Set a plain attribute.
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// A direct mutation of a backing node, emitted alongside a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomPatch {
    /// Rewrite the class string: drop `exclude` entries, prepend `prepend`.
    ReplaceClasses {
        exclude: Vec<String>,
        prepend: String,
    },
    /// Write the native "open" property.
    SetOpen(bool),
    /// Set a plain attribute.
    SetAttribute { name: String, value: String },
}

/// Apply a patch to a live node. Idempotent for every patch kind.
pub fn apply_patch(node: &mut dyn DomNode, patch: &DomPatch) {
    match patch {
        DomPatch::ReplaceClasses { exclude, prepend } => {
            let excluded: Vec<&str> = exclude.iter().map(String::as_str).collect();
            let class_name = filtered_and_prepended(&node.class_name(), &excluded, prepend);
            trace!("patch classes on <{}>: {class_name:?}", node.node_name());
            node.set_class_name(&class_name);
        }
        DomPatch::SetOpen(open) => {
            trace!("patch open on <{}>: {open}", node.node_name());
            node.set_open(*open);
        }
        DomPatch::SetAttribute { name, value } => {
            trace!("patch attribute on <{}>: {name}={value:?}", node.node_name());
            node.set_attribute(name, value);
        }
    }
}
