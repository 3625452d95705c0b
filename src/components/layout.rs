//! Layout calculations for the page

use crate::dom::ElementId;
use crate::page::HeaderState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the mobile navigation panel
const NAV_PANEL_WIDTH: u16 = 26;

/// Main screen layout areas
pub struct PageLayout {
    pub header: Option<Rect>,
    pub categories: Rect,
    pub content: Rect,
    pub status: Rect,
    pub nav_panel: Option<Rect>,
}

/// Rows the header occupies in a given state
pub fn header_height(state: HeaderState) -> u16 {
    match state {
        HeaderState::Plain => 3,
        HeaderState::Scrolled => 1,
        HeaderState::ScrolledHidden => 0,
    }
}

/// Calculate the page layout
///
/// `nav_links` is `Some(count)` when the mobile navigation panel is open.
pub fn calculate_page_layout(
    area: Rect,
    header: HeaderState,
    nav_links: Option<usize>,
) -> PageLayout {
    let header_rows = header_height(header);

    // Vertical: header + category bar + content + status line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_rows),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header_area = if header_rows > 0 { Some(chunks[0]) } else { None };

    // Panel drops down from under the header, right aligned
    let nav_panel = nav_links.map(|links| {
        let width = NAV_PANEL_WIDTH.min(area.width);
        let top = chunks[1].y;
        let rows = u16::try_from(links).unwrap_or(u16::MAX).saturating_add(2);
        let height = rows.min(area.bottom().saturating_sub(top));
        Rect::new(area.right().saturating_sub(width), top, width, height)
    });

    PageLayout {
        header: header_area,
        categories: chunks[1],
        content: chunks[2],
        status: chunks[3],
        nav_panel,
    }
}

/// Screen regions mapped to the elements drawn in them
///
/// Regions recorded later sit on top, so lookups search newest first.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, ElementId)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, id: ElementId) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, id));
        }
    }

    /// Topmost element at a terminal cell
    pub fn hit(&self, column: u16, row: u16) -> Option<ElementId> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(_, id)| *id)
    }
}

#[cfg(test)]
impl HitMap {
    /// Area last recorded for an element
    pub fn area_of(&self, id: ElementId) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, r)| *r == id)
            .map(|(rect, _)| *rect)
    }
}
