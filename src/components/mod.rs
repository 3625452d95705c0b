//! UI Components
//!
//! Renderers for the page document. Each draws one region from the current
//! element state and records where its elements landed for mouse hit-testing.

pub mod category_bar;
pub mod header;
pub mod layout;
pub mod menu_list;
pub mod nav_menu;
pub mod status_bar;

pub use category_bar::{active_category_index, draw_category_bar};
pub use header::draw_header;
pub use layout::{calculate_page_layout, HitMap};
pub use menu_list::{content_height, draw_menu_list};
pub use nav_menu::draw_nav_menu;
pub use status_bar::draw_status_bar;

use crate::dom::{Document, ElementId};
use crate::model::Menu;
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in cells, saturating at `u16::MAX`
pub fn cell_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Shared read-only state for one render pass
pub struct PageRenderContext<'a> {
    pub doc: &'a Document,
    pub menu: &'a Menu,
    /// Viewport is at or above the desktop breakpoint
    pub desktop: bool,
    /// Body carries the `touch` class
    pub touch: bool,
    pub hover: Option<ElementId>,
    pub scroll_lines: u16,
    pub scroll_y: u32,
    /// Label of the active category, for the section heading
    pub active_label: String,
}

impl PageRenderContext<'_> {
    /// Hover styling applies; never on touch devices
    pub fn hovered(&self, id: ElementId) -> bool {
        !self.touch && self.hover == Some(id)
    }
}
