//! Widget event types.
//!
//! Widgets report state changes as events carrying the widget ID; the host
//! drains them and dispatches whatever handlers it has wired up.

/// Identifies which handler to call for a widget event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEventKind {
    /// Body content became visible.
    Expand,
    /// Body content was hidden.
    Collapse,
}

/// A widget event to be dispatched by the host.
#[derive(Debug, Clone)]
pub struct WidgetEvent {
    /// Which kind of event
    pub kind: WidgetEventKind,
    /// Widget ID that triggered the event
    pub widget_id: String,
}

impl WidgetEvent {
    /// Create a new widget event.
    pub fn new(kind: WidgetEventKind, widget_id: impl Into<String>) -> Self {
        Self {
            kind,
            widget_id: widget_id.into(),
        }
    }
}
