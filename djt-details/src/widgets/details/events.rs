//! Event handling for the Details widget.

use log::debug;

use crate::widgets::events::{WidgetEvent, WidgetEventKind};

use super::Details;

impl Details {
    /// Flip visibility. Returns the resulting event kind.
    pub fn toggle(&self) -> WidgetEventKind {
        let mut now_visible = false;
        self.write_state(|state| {
            state.is_visible = !state.is_visible;
            now_visible = state.is_visible;
        });
        self.mark_dirty();

        debug!("{}: toggled, visible={now_visible}", self.element_id());

        if now_visible {
            WidgetEventKind::Expand
        } else {
            WidgetEventKind::Collapse
        }
    }

    /// Pointer-down on the summary region.
    ///
    /// Toggles unconditionally: no debouncing, no distinction between
    /// pointer types. Rapid repeated taps each flip the state again.
    pub fn on_pointer_down(&self) -> WidgetEvent {
        let kind = self.toggle();
        WidgetEvent::new(kind, self.id_string())
    }
}
