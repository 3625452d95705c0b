//! Category selector controls

use crate::components::{cell_width, HitMap, PageRenderContext};
use crate::dom::{attr, ElementId, ElementKind, StateClass, View};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_category_bar(
    frame: &mut Frame,
    area: Rect,
    ctx: &PageRenderContext,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = Rect::new(
        inner.x + 1,
        inner.y + inner.height.saturating_sub(1) / 2,
        inner.width.saturating_sub(1),
        1,
    );
    let mut x = row.x;

    for id in ctx.doc.query_all(ElementKind::CategoryButton) {
        let label = ctx
            .doc
            .attribute(id, attr::LABEL)
            .or_else(|| ctx.doc.attribute(id, attr::DATA_CATEGORY))
            .unwrap_or_else(|| "All".to_string());
        let text = format!(" {} ", label);
        let width = cell_width(&text);
        if x.saturating_add(width) > row.right() {
            break;
        }

        let style = if ctx.doc.has_class(id, StateClass::Active) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(196, 120, 64))
                .add_modifier(Modifier::BOLD)
        } else if ctx.hovered(id) {
            // Hover affordance; suppressed on touch devices
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };

        let rect = Rect::new(x, row.y, width, 1);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
        hits.push(rect, id);
        x = x.saturating_add(width).saturating_add(1);
    }
}

/// Index of the control carrying `active`, if any
pub fn active_category_index<V: View>(view: &V) -> Option<usize> {
    view.query_all(ElementKind::CategoryButton)
        .into_iter()
        .find(|id| view.has_class(*id, StateClass::Active))
        .and_then(|id| match id {
            ElementId::CategoryButton(i) => Some(i),
            _ => None,
        })
}
