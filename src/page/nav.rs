//! Mobile navigation panel state

use crate::dom::{attr, style, ElementId, StateClass, View};
use tracing::debug;

/// Viewport width (logical pixels) from which the desktop layout applies
pub const DESKTOP_BREAKPOINT: u32 = 768;

/// Open/closed state of the navigation panel
#[derive(Debug, Default)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle<V: View>(&mut self, view: &mut V) {
        self.apply(view, !self.open);
    }

    /// Force the panel closed
    ///
    /// Every attribute is rewritten even when already closed, so the page ends
    /// up collapsed and scrollable whatever it looked like before.
    pub fn close<V: View>(&mut self, view: &mut V) {
        self.apply(view, false);
    }

    fn apply<V: View>(&mut self, view: &mut V, open: bool) {
        if self.open != open {
            debug!(open, "navigation panel");
        }
        self.open = open;

        view.set_class(ElementId::NavMenu, StateClass::Active, open);
        view.set_attribute(
            ElementId::NavToggle,
            attr::ARIA_EXPANDED,
            if open { "true" } else { "false" },
        );
        view.set_style(
            ElementId::Body,
            style::OVERFLOW,
            if open { Some("hidden") } else { None },
        );
    }
}
