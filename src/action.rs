//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Input handlers emit Actions in response to terminal events, and the App
//! processes them by calling into the page controller.

use crate::dom::ElementId;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick: advance timers and run the pending frame
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Open or close the navigation panel
    ToggleNav,
    /// Escape pressed
    Escape,
    /// Mouse click on an element (or on empty page space)
    Click(Option<ElementId>),
    /// Move keyboard focus between navigation links
    FocusNextLink,
    FocusPrevLink,
    /// Activate the focused element
    ActivateFocused,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the page by a number of lines (negative is up)
    ScrollBy(i32),
    /// Scroll the page by a number of viewport heights
    ScrollPages(i32),
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────────────────────
    // Category Filter
    // ─────────────────────────────────────────────────────────────────────────
    /// Activate the category control at an index
    SelectCategory(usize),
    NextCategory,
    PrevCategory,

    // ─────────────────────────────────────────────────────────────────────────
    // Pointer
    // ─────────────────────────────────────────────────────────────────────────
    /// Pointer moved over an element
    Hover(Option<ElementId>),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::ToggleNav => write!(f, "ToggleNav"),
            Action::Escape => write!(f, "Escape"),
            Action::Click(Some(target)) => write!(f, "Click({})", target),
            Action::Click(None) => write!(f, "Click(page)"),
            Action::FocusNextLink => write!(f, "FocusNextLink"),
            Action::FocusPrevLink => write!(f, "FocusPrevLink"),
            Action::ActivateFocused => write!(f, "ActivateFocused"),
            Action::ScrollBy(lines) => write!(f, "ScrollBy({})", lines),
            Action::ScrollPages(pages) => write!(f, "ScrollPages({})", pages),
            Action::ScrollToTop => write!(f, "ScrollToTop"),
            Action::ScrollToBottom => write!(f, "ScrollToBottom"),
            Action::SelectCategory(index) => write!(f, "SelectCategory({})", index),
            Action::NextCategory => write!(f, "NextCategory"),
            Action::PrevCategory => write!(f, "PrevCategory"),
            Action::Hover(Some(target)) => write!(f, "Hover({})", target),
            Action::Hover(None) => write!(f, "Hover(page)"),
        }
    }
}
