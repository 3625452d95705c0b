//! Root application component
//!
//! The App struct implements the Component trait. It owns the page
//! controller and translates terminal input into controller calls; it keeps
//! no interaction state of its own beyond scroll position, viewport size and
//! pointer hover.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    active_category_index, calculate_page_layout, content_height, draw_category_bar,
    draw_header, draw_menu_list, draw_nav_menu, draw_status_bar, HitMap, PageRenderContext,
};
use crate::config::Config;
use crate::dom::{attr, build_document, style, Document, ElementId, ElementKind, View};
use crate::model::Menu;
use crate::page::{Capabilities, PageController, DESKTOP_BREAKPOINT};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Lines scrolled per mouse wheel notch
const WHEEL_LINES: i32 = 3;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Interaction controller over the page document
    pub page: PageController<Document>,

    /// Content being displayed
    pub menu: Menu,

    pub config: Config,

    /// Clock origin for page timers
    started: Instant,

    /// Terminal size in cells
    viewport: (u16, u16),

    /// Page scroll position in lines
    scroll_lines: u16,

    /// Rows available to the menu list in the last frame
    content_rows: u16,

    /// Element under the mouse pointer
    hover: Option<ElementId>,

    /// Element regions from the last frame
    hits: HitMap,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Build the page for `menu` and wire the controller to it
    pub fn new(menu: Menu, config: Config, capabilities: Capabilities) -> Result<App> {
        let page = PageController::new(build_document(&menu), capabilities)?;

        Ok(App {
            should_quit: false,
            page,
            menu,
            config,
            started: Instant::now(),
            viewport: (0, 0),
            scroll_lines: 0,
            content_rows: 0,
            hover: None,
            hits: HitMap::default(),
        })
    }

    /// Viewport width is at or above the desktop breakpoint
    pub fn is_desktop(&self) -> bool {
        self.config.logical_width(self.viewport.0) >= DESKTOP_BREAKPOINT
    }

    /// Run timers and the pending frame as of `now` (relative to startup)
    pub fn tick_at(&mut self, now: Duration) {
        self.page.tick(now);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────

    fn max_scroll(&self) -> u16 {
        content_height(self.page.view(), &self.menu).saturating_sub(self.content_rows)
    }

    fn scroll_locked(&self) -> bool {
        self.page.view().inline_style(ElementId::Body, style::OVERFLOW) == Some("hidden")
    }

    /// Move the page and notify the controller when the offset changed
    fn scroll_to(&mut self, lines: i64) {
        if self.scroll_locked() {
            trace!("scroll ignored while body is locked");
            return;
        }

        let target = lines.clamp(0, i64::from(self.max_scroll())) as u16;
        if target == self.scroll_lines {
            return;
        }
        self.scroll_lines = target;

        let offset = self.config.logical_offset(target);
        self.page.view_mut().set_scroll_y(offset);
        self.page.handle_scroll();
    }

    fn scroll_by(&mut self, lines: i32) {
        self.scroll_to(i64::from(self.scroll_lines) + i64::from(lines));
    }

    /// Re-clamp after the content or viewport shrank
    fn clamp_scroll(&mut self) {
        if self.scroll_lines > self.max_scroll() && !self.scroll_locked() {
            self.scroll_to(i64::from(self.max_scroll()));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Categories & Focus
    // ─────────────────────────────────────────────────────────────────────────

    fn category_count(&self) -> usize {
        self.page.view().query_all(ElementKind::CategoryButton).len()
    }

    fn cycle_category(&mut self, forward: bool) {
        let count = self.category_count();
        if count == 0 {
            return;
        }
        let current = active_category_index(self.page.view()).unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.page.select_category(next);
    }

    /// Move focus through toggle and links while the panel is open
    fn cycle_link_focus(&mut self, forward: bool) {
        let links = self.menu.links.len();
        if links == 0 {
            return;
        }
        let next = match self.page.view().focused() {
            Some(ElementId::NavLink(i)) if forward => (i + 1) % links,
            Some(ElementId::NavLink(i)) => (i + links - 1) % links,
            _ if forward => 0,
            _ => links - 1,
        };
        self.page.view_mut().focus(ElementId::NavLink(next));
    }

    fn activate_focused(&mut self) {
        let focused = self.page.view().focused();
        if let Some(target @ (ElementId::NavToggle | ElementId::NavLink(_))) = focused {
            self.page.handle_click(Some(target));
        }
    }

    fn render_context(&self) -> PageRenderContext<'_> {
        let doc = self.page.view();
        let active_label = active_category_index(doc)
            .and_then(|i| doc.attribute(ElementId::CategoryButton(i), attr::LABEL))
            .unwrap_or_else(|| "All".to_string());

        PageRenderContext {
            doc,
            menu: &self.menu,
            desktop: self.is_desktop(),
            touch: self.page.is_touch(),
            hover: self.hover,
            scroll_lines: self.scroll_lines,
            scroll_y: doc.scroll_y(),
            active_label,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        // Page timers count from the first frame, not from menu loading
        self.started = Instant::now();
        debug!(
            categories = self.category_count(),
            links = self.menu.links.len(),
            touch = self.page.is_touch(),
            "page ready"
        );
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let nav_open = self.page.is_nav_open();

        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc => Some(Action::Escape),
            KeyCode::Char('m') => Some(Action::ToggleNav),

            // The open panel takes vertical navigation
            KeyCode::Down | KeyCode::Char('j') if nav_open => Some(Action::FocusNextLink),
            KeyCode::Up | KeyCode::Char('k') if nav_open => Some(Action::FocusPrevLink),
            KeyCode::Enter => Some(Action::ActivateFocused),

            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollBy(1)),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollBy(-1)),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::ScrollPages(1)),
            KeyCode::PageUp => Some(Action::ScrollPages(-1)),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollToTop),
            KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollToBottom),

            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextCategory),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevCategory),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                Some(Action::SelectCategory(index))
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(Action::Click(self.hits.hit(mouse.column, mouse.row)))
            }
            MouseEventKind::ScrollDown => Some(Action::ScrollBy(WHEEL_LINES)),
            MouseEventKind::ScrollUp => Some(Action::ScrollBy(-WHEEL_LINES)),
            MouseEventKind::Moved => Some(Action::Hover(self.hits.hit(mouse.column, mouse.row))),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!(%action, "update");
        }

        match action {
            Action::Tick => {
                let now = self.started.elapsed();
                self.tick_at(now);
                self.clamp_scroll();
            }
            Action::Resize(width, height) => {
                self.viewport = (width, height);
                self.page.handle_resize(self.config.logical_width(width));
            }
            Action::Quit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleNav => {
                // The toggle control is not rendered at desktop widths
                if !self.is_desktop() {
                    self.page.toggle_nav();
                }
            }
            Action::Escape => {
                self.page.handle_escape();
            }
            Action::Click(target) => self.page.handle_click(target),
            Action::FocusNextLink => self.cycle_link_focus(true),
            Action::FocusPrevLink => self.cycle_link_focus(false),
            Action::ActivateFocused => self.activate_focused(),

            // ─────────────────────────────────────────────────────────────────
            // Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollBy(lines) => self.scroll_by(lines),
            Action::ScrollPages(pages) => {
                let page = i32::from(self.content_rows.max(1));
                self.scroll_by(pages * page);
            }
            Action::ScrollToTop => self.scroll_to(0),
            Action::ScrollToBottom => self.scroll_to(i64::from(self.max_scroll())),

            // ─────────────────────────────────────────────────────────────────
            // Category Filter
            // ─────────────────────────────────────────────────────────────────
            Action::SelectCategory(index) => self.page.select_category(index),
            Action::NextCategory => self.cycle_category(true),
            Action::PrevCategory => self.cycle_category(false),

            Action::Hover(target) => self.hover = target,
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let nav_links = if self.page.is_nav_open() && !self.is_desktop() {
            Some(self.menu.links.len())
        } else {
            None
        };
        let layout = calculate_page_layout(area, self.page.header_state(), nav_links);
        self.content_rows = layout.content.height;

        let mut hits = HitMap::default();
        {
            let ctx = self.render_context();
            hits.push(area, ElementId::Body);
            if let Some(header) = layout.header {
                draw_header(frame, header, &ctx, &mut hits);
            }
            draw_category_bar(frame, layout.categories, &ctx, &mut hits);
            draw_menu_list(frame, layout.content, &ctx, &mut hits);
            draw_status_bar(frame, layout.status, &ctx);
            if let Some(panel) = layout.nav_panel {
                draw_nav_menu(frame, panel, &ctx, &mut hits);
            }
        }
        self.hits = hits;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::filter::HIDE_DELAY;
    use crate::page::HeaderState;
    use crossterm::event::KeyEventState;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let mut app = App::new(Menu::sample(), Config::default(), Capabilities::default()).unwrap();
        app.init().unwrap();
        app.update(Action::Resize(60, 20)).unwrap();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app.handle_key_event(key(code)).unwrap() {
            app.update(action).unwrap();
        }
    }

    fn render(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(app.viewport.0, app.viewport.1)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
    }

    #[test]
    fn test_init_restarts_timer_clock() {
        let mut app = app();
        if let Some(earlier) = app.started.checked_sub(Duration::from_secs(10)) {
            app.started = earlier;
        }

        app.init().unwrap();
        assert!(app.started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn test_key_toggles_navigation_on_mobile() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert!(app.page.is_nav_open());

        press(&mut app, KeyCode::Esc);
        assert!(!app.page.is_nav_open());
        assert_eq!(app.page.view().focused(), Some(ElementId::NavToggle));
    }

    #[test]
    fn test_toggle_is_inert_on_desktop() {
        let mut app = app();
        app.update(Action::Resize(120, 40)).unwrap();
        assert!(app.is_desktop());

        press(&mut app, KeyCode::Char('m'));
        assert!(!app.page.is_nav_open());
    }

    #[test]
    fn test_growing_past_breakpoint_closes_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));

        app.update(Action::Resize(96, 30)).unwrap();
        assert!(!app.page.is_nav_open());
    }

    #[test]
    fn test_scroll_updates_header_on_next_frame() {
        let mut app = app();
        render(&mut app);

        // 6 lines at 20px per line = 120
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.page.view().scroll_y(), 120);
        assert_eq!(app.page.header_state(), HeaderState::Plain);

        app.tick_at(Duration::from_millis(16));
        assert_eq!(app.page.header_state(), HeaderState::Scrolled);

        press(&mut app, KeyCode::Char('G'));
        app.tick_at(Duration::from_millis(32));
        assert_eq!(app.page.header_state(), HeaderState::ScrolledHidden);

        press(&mut app, KeyCode::Char('g'));
        app.tick_at(Duration::from_millis(48));
        assert_eq!(app.page.header_state(), HeaderState::Plain);
    }

    #[test]
    fn test_open_navigation_locks_scroll() {
        let mut app = app();
        render(&mut app);
        press(&mut app, KeyCode::Char('m'));

        app.update(Action::ScrollBy(5)).unwrap();
        assert_eq!(app.scroll_lines, 0);

        // Arrow keys move through the links instead
        press(&mut app, KeyCode::Down);
        assert_eq!(app.page.view().focused(), Some(ElementId::NavLink(0)));
        press(&mut app, KeyCode::Up);
        assert_eq!(
            app.page.view().focused(),
            Some(ElementId::NavLink(app.menu.links.len() - 1))
        );

        press(&mut app, KeyCode::Enter);
        assert!(!app.page.is_nav_open());
    }

    #[test]
    fn test_category_keys_filter_items() {
        let mut app = app();
        let drinks = app.menu.categories().iter().position(|c| c == "Drinks").unwrap() + 1;

        press(&mut app, KeyCode::Char(char::from_digit(drinks as u32 + 1, 10).unwrap()));
        assert_eq!(app.page.active_category(), "Drinks");

        app.tick_at(HIDE_DELAY);
        let shown: Vec<&str> = app
            .menu
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| app.page.view().is_displayed(ElementId::MenuItem(*i)))
            .map(|(_, item)| item.category.as_str())
            .collect();
        assert!(!shown.is_empty());
        assert!(shown.iter().all(|c| *c == "Drinks"));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.page.active_category(), "all");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.page.active_category(), "Drinks");
    }

    #[test]
    fn test_mouse_click_hits_rendered_toggle() {
        let mut app = app();
        render(&mut app);

        let toggle = app.hits.area_of(ElementId::NavToggle).unwrap();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: toggle.x,
            row: toggle.y,
            modifiers: KeyModifiers::NONE,
        };
        let action = app.handle_mouse_event(click).unwrap().unwrap();
        assert_eq!(action, Action::Click(Some(ElementId::NavToggle)));

        app.update(action).unwrap();
        assert!(app.page.is_nav_open());

        // Panel is drawn now; a click on the menu list is outside it
        render(&mut app);
        assert!(app.hits.area_of(ElementId::NavMenu).is_some());
        app.update(Action::Click(Some(ElementId::MenuItem(0)))).unwrap();
        assert!(!app.page.is_nav_open());
    }

    #[test]
    fn test_touch_mode_suppresses_hover() {
        let caps = Capabilities {
            touch_events: true,
            max_touch_points: 1,
        };
        let app = App::new(Menu::sample(), Config::default(), caps).unwrap();
        let mut ctx = app.render_context();
        ctx.hover = Some(ElementId::CategoryButton(1));

        assert!(ctx.touch);
        assert!(!ctx.hovered(ElementId::CategoryButton(1)));
    }
}
