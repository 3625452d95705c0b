//! Mobile navigation panel overlay

use crate::components::{HitMap, PageRenderContext};
use crate::dom::{ElementId, StateClass, View};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the panel if it carries the `active` class
pub fn draw_nav_menu(frame: &mut Frame, area: Rect, ctx: &PageRenderContext, hits: &mut HitMap) {
    if !ctx.doc.has_class(ElementId::NavMenu, StateClass::Active) {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Navigation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(196, 120, 64)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    hits.push(area, ElementId::NavMenu);

    for (i, link) in ctx.menu.links.iter().enumerate() {
        let row = match u16::try_from(i) {
            Ok(i) if inner.y.saturating_add(i) < inner.bottom() => inner.y + i,
            _ => break,
        };

        let id = ElementId::NavLink(i);
        let focused = ctx.doc.focused() == Some(id);
        let style = if focused || ctx.hovered(id) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if focused { "› " } else { "  " };

        let rect = Rect::new(inner.x, row, inner.width, 1);
        let line = Line::from(vec![
            Span::styled(marker, style),
            Span::styled(link.label.clone(), style),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), rect);
        hits.push(rect, id);
    }
}
