//! Menu items, scrolled by the page offset
//!
//! Items with `display: none` take no rows. Items still in layout but without
//! `visible` are mid-animation and render dimmed.

use crate::components::{HitMap, PageRenderContext};
use crate::dom::{Document, ElementId, StateClass, View};
use crate::model::Menu;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows per item: name/price, description, spacer
const ITEM_ROWS: usize = 3;
/// Section heading plus spacer
const HEADING_ROWS: usize = 2;

/// Total rows the list needs at the current filter state, saturating at
/// `u16::MAX`
pub fn content_height(doc: &Document, menu: &Menu) -> u16 {
    let shown = (0..menu.items.len())
        .filter(|i| doc.is_displayed(ElementId::MenuItem(*i)))
        .count();
    let rows = shown.saturating_mul(ITEM_ROWS).saturating_add(HEADING_ROWS);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn draw_menu_list(frame: &mut Frame, area: Rect, ctx: &PageRenderContext, hits: &mut HitMap) {
    let width = area.width.saturating_sub(4) as usize;
    let mut rows: Vec<(Line, Option<ElementId>)> = vec![
        (
            Line::from(Span::styled(
                format!("  Our Menu · {}", ctx.active_label),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            None,
        ),
        (Line::from(""), None),
    ];

    for (i, item) in ctx.menu.items.iter().enumerate() {
        let id = ElementId::MenuItem(i);
        if !ctx.doc.is_displayed(id) {
            continue;
        }

        let entering = !ctx.doc.has_class(id, StateClass::Visible);
        let (name_style, text_style) = if entering {
            (Style::default().fg(Color::DarkGray), Style::default().fg(Color::DarkGray))
        } else {
            (
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Gray),
            )
        };
        let price_style = if entering {
            text_style
        } else {
            Style::default().fg(Color::Rgb(196, 120, 64))
        };

        let price = ctx.menu.formatted_price(item);
        let padding = width.saturating_sub(item.name.width() + price.width());
        rows.push((
            Line::from(vec![
                Span::raw("  "),
                Span::styled(item.name.clone(), name_style),
                Span::raw(" ".repeat(padding)),
                Span::styled(price, price_style),
            ]),
            Some(id),
        ));
        rows.push((
            Line::from(vec![
                Span::raw("  "),
                Span::styled(item.description.clone(), text_style.add_modifier(Modifier::ITALIC)),
            ]),
            Some(id),
        ));
        rows.push((Line::from(""), None));
    }

    let visible_rows = rows
        .into_iter()
        .skip(ctx.scroll_lines as usize)
        .take(area.height as usize);

    for (offset, (line, id)) in visible_rows.enumerate() {
        let rect = Rect::new(area.x, area.y + offset as u16, area.width, 1);
        frame.render_widget(Paragraph::new(line), rect);
        if let Some(id) = id {
            hits.push(rect, id);
        }
    }
}
