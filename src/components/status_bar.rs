//! Bottom line: key hints and page state

use crate::components::PageRenderContext;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_status_bar(frame: &mut Frame, area: Rect, ctx: &PageRenderContext) {
    let key = Style::default().fg(Color::Rgb(196, 120, 64));
    let hint = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    if !ctx.desktop {
        spans.push(Span::styled(" m", key));
        spans.push(Span::styled(" menu ", hint));
    }
    spans.extend([
        Span::styled(" ←/→", key),
        Span::styled(" category ", hint),
        Span::styled(" j/k", key),
        Span::styled(" scroll ", hint),
        Span::styled(" Esc", key),
        Span::styled(" close ", hint),
        Span::styled(" q", key),
        Span::styled(" quit ", hint),
    ]);

    let mode = match (ctx.desktop, ctx.touch) {
        (true, true) => "desktop · touch",
        (true, false) => "desktop",
        (false, true) => "mobile · touch",
        (false, false) => "mobile",
    };
    spans.push(Span::styled(
        format!("  {} · y={}", mode, ctx.scroll_y),
        hint,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
