//! Page interaction controller
//!
//! One instance is built at startup and owns every piece of interaction
//! state: the navigation panel, the header scroll sampler, the category
//! filter, and the touch flag. All page effects go through the [`View`].

pub mod filter;
pub mod nav;
pub mod scroll;
pub mod touch;

pub use filter::CategoryFilter;
pub use nav::{NavState, DESKTOP_BREAKPOINT};
pub use scroll::{HeaderScroll, HeaderState};
pub use touch::Capabilities;

use crate::dom::{Document, ElementId, TimerId, TimerTask, View};
use crate::error::PageError;
use std::time::Duration;
use tracing::{debug, info};

/// Elements the controller cannot work without
const REQUIRED_ELEMENTS: [ElementId; 4] = [
    ElementId::NavToggle,
    ElementId::NavMenu,
    ElementId::Header,
    ElementId::Body,
];

pub struct PageController<V: View> {
    view: V,
    nav: NavState,
    header: HeaderScroll,
    filter: CategoryFilter,
    touch: bool,
}

impl<V: View> PageController<V> {
    /// Wire the controller to a page
    ///
    /// Fails if one of the toggle, panel, header or body is missing. Leaves the
    /// navigation closed and applies touch detection.
    pub fn new(mut view: V, capabilities: Capabilities) -> Result<Self, PageError> {
        if let Some(missing) = REQUIRED_ELEMENTS.into_iter().find(|id| !view.contains(*id)) {
            return Err(PageError::MissingElement(missing));
        }

        let mut nav = NavState::default();
        nav.close(&mut view);
        let touch = touch::apply(&mut view, &capabilities);
        info!(touch, "page controller ready");

        Ok(Self {
            view,
            nav,
            header: HeaderScroll::default(),
            filter: CategoryFilter::default(),
            touch,
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn is_touch(&self) -> bool {
        self.touch
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_nav_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn toggle_nav(&mut self) {
        self.nav.toggle(&mut self.view);
    }

    pub fn close_nav(&mut self) {
        self.nav.close(&mut self.view);
    }

    /// Route a click on `target` (`None` for empty page space)
    pub fn handle_click(&mut self, target: Option<ElementId>) {
        match target {
            Some(ElementId::NavToggle) => {
                self.toggle_nav();
                return;
            }
            Some(ElementId::NavLink(_)) => {
                self.close_nav();
                return;
            }
            Some(ElementId::CategoryButton(index)) => self.select_category(index),
            _ => {}
        }

        let inside = target.is_some_and(|t| t.in_navigation());
        if self.nav.is_open() && !inside {
            debug!(?target, "click outside navigation");
            self.close_nav();
        }
    }

    /// Escape key: close the panel and hand focus back to the toggle
    ///
    /// Returns whether the key was consumed.
    pub fn handle_escape(&mut self) -> bool {
        if !self.nav.is_open() {
            return false;
        }
        self.close_nav();
        self.view.focus(ElementId::NavToggle);
        true
    }

    /// Viewport resized to `width` logical pixels
    pub fn handle_resize(&mut self, width: u32) {
        if width >= DESKTOP_BREAKPOINT && self.nav.is_open() {
            debug!(width, "desktop width reached, closing navigation");
            self.close_nav();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Header
    // ─────────────────────────────────────────────────────────────────────────

    pub fn handle_scroll(&mut self) {
        self.header.on_scroll(&mut self.view);
    }

    /// Animation-frame callback
    pub fn run_frame(&mut self) -> HeaderState {
        self.header.on_frame(&mut self.view)
    }

    pub fn header_state(&self) -> HeaderState {
        self.header.state()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Category filter
    // ─────────────────────────────────────────────────────────────────────────

    /// Activate the category control at `index`
    pub fn select_category(&mut self, index: usize) {
        self.filter
            .select(&mut self.view, ElementId::CategoryButton(index));
    }

    /// Timer callback
    pub fn fire_timer(&mut self, timer: TimerId, task: TimerTask) {
        self.filter.complete(&mut self.view, timer, task);
    }
}

#[cfg(test)]
impl<V: View> PageController<V> {
    pub fn active_category(&self) -> &str {
        self.filter.active()
    }
}

impl PageController<Document> {
    /// Advance the document clock to `now`, then run due timers and any
    /// pending frame callback
    pub fn tick(&mut self, now: Duration) {
        for (timer, task) in self.view.advance_to(now) {
            self.fire_timer(timer, task);
        }
        if self.view.take_frame_request() {
            self.run_frame();
        }
    }
}
