//! Header scroll effect
//!
//! Scroll events only request a frame; the header classes are recomputed once
//! per frame from the offset at that moment.

use crate::dom::{ElementId, StateClass, View};
use tracing::trace;

/// Offset past which the header switches to its compact style
pub const SCROLLED_AFTER: u32 = 100;
/// Offset past which scrolling down hides the header
pub const HIDE_AFTER: u32 = 200;

/// Visual state of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    #[default]
    Plain,
    Scrolled,
    ScrolledHidden,
}

impl HeaderState {
    /// Derive the state from the current offset and the previous sample
    pub fn compute(offset: u32, last_offset: u32) -> HeaderState {
        if offset <= SCROLLED_AFTER {
            HeaderState::Plain
        } else if offset > HIDE_AFTER && offset > last_offset {
            HeaderState::ScrolledHidden
        } else {
            HeaderState::Scrolled
        }
    }

    pub fn is_scrolled(&self) -> bool {
        !matches!(self, HeaderState::Plain)
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, HeaderState::ScrolledHidden)
    }
}

/// Frame-coalesced header state tracker
#[derive(Debug, Default)]
pub struct HeaderScroll {
    last_offset: u32,
    frame_scheduled: bool,
    state: HeaderState,
}

impl HeaderScroll {
    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Scroll event: request a frame unless one is already pending
    pub fn on_scroll<V: View>(&mut self, view: &mut V) {
        if !self.frame_scheduled {
            self.frame_scheduled = true;
            view.schedule_frame();
        }
    }

    /// Frame callback: sample the offset and restyle the header
    pub fn on_frame<V: View>(&mut self, view: &mut V) -> HeaderState {
        self.frame_scheduled = false;

        let offset = view.scroll_y();
        let state = HeaderState::compute(offset, self.last_offset);
        view.set_class(ElementId::Header, StateClass::Scrolled, state.is_scrolled());
        view.set_class(ElementId::Header, StateClass::Hidden, state.is_hidden());

        if state != self.state {
            trace!(offset, ?state, "header state changed");
        }
        self.last_offset = offset;
        self.state = state;
        state
    }
}
