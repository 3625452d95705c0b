//! Page header: restaurant name, navigation toggle or inline links
//!
//! Plain headers are a bordered three-row bar. Once the page is scrolled the
//! header shrinks to a single inverted row.

use crate::components::{cell_width, HitMap, PageRenderContext};
use crate::dom::{attr, ElementId, StateClass, View};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BRAND: Color = Color::Rgb(196, 120, 64);

pub fn draw_header(frame: &mut Frame, area: Rect, ctx: &PageRenderContext, hits: &mut HitMap) {
    let doc = ctx.doc;
    hits.push(area, ElementId::Header);

    let scrolled = doc.has_class(ElementId::Header, StateClass::Scrolled);
    let (inner, base) = if scrolled {
        let base = Style::default().bg(BRAND).fg(Color::Black);
        frame.render_widget(Block::default().style(base), area);
        (area, base)
    } else {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let row = Rect::new(
            inner.x,
            area.y + inner.height.saturating_sub(1) / 2,
            inner.width,
            1,
        );
        (row, Style::default())
    };

    // Brand on the left
    let mut brand = vec![Span::styled(
        format!(" {} ", ctx.menu.name),
        base.add_modifier(Modifier::BOLD).fg(if scrolled { Color::Black } else { BRAND }),
    )];
    if !scrolled && !ctx.menu.tagline.is_empty() {
        brand.push(Span::styled(ctx.menu.tagline.clone(), Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(brand)), inner);

    if ctx.desktop {
        draw_inline_links(frame, inner, ctx, base, hits);
    } else {
        draw_toggle(frame, inner, ctx, base, hits);
    }
}

/// Hamburger control shown on mobile widths
fn draw_toggle(
    frame: &mut Frame,
    row: Rect,
    ctx: &PageRenderContext,
    base: Style,
    hits: &mut HitMap,
) {
    let expanded = ctx
        .doc
        .attribute(ElementId::NavToggle, attr::ARIA_EXPANDED)
        .as_deref()
        == Some("true");
    let label = if expanded { " ✕ Close " } else { " ☰ Menu " };

    let width = cell_width(label).min(row.width);
    let x = row.right().saturating_sub(width.saturating_add(1));
    let rect = Rect::new(x, row.y, width, 1);

    let mut style = base.add_modifier(Modifier::BOLD);
    if ctx.doc.focused() == Some(ElementId::NavToggle) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if ctx.hovered(ElementId::NavToggle) || expanded {
        style = style.add_modifier(Modifier::REVERSED);
    }

    frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
    hits.push(rect, ElementId::NavToggle);
}

/// Links laid out in the header on desktop widths
fn draw_inline_links(
    frame: &mut Frame,
    row: Rect,
    ctx: &PageRenderContext,
    base: Style,
    hits: &mut HitMap,
) {
    let labels: Vec<String> = ctx
        .menu
        .links
        .iter()
        .map(|link| format!(" {} ", link.label))
        .collect();
    let total = labels
        .iter()
        .fold(0u16, |sum, l| sum.saturating_add(cell_width(l)));

    let start = row.right().saturating_sub(total.saturating_add(1));
    let mut x = start.max(row.x);
    for (i, label) in labels.iter().enumerate() {
        let width = cell_width(label);
        if x.saturating_add(width) > row.right() {
            break;
        }
        let id = ElementId::NavLink(i);
        let mut style = base;
        if ctx.hovered(id) || ctx.doc.focused() == Some(id) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let rect = Rect::new(x, row.y, width, 1);
        frame.render_widget(Paragraph::new(Span::styled(label.clone(), style)), rect);
        hits.push(rect, id);
        x += width;
    }
}
