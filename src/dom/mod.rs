//! Document layer - the page structure the interaction logic manipulates
//!
//! The controller never talks to a renderer directly. Everything it does goes
//! through the [`View`] trait: toggling state classes, writing attributes and
//! inline styles, moving focus, and asking for frame callbacks or timers.
//! [`Document`] is the in-memory implementation used by the terminal front
//! end and by the tests.

pub mod document;
pub mod markup;
pub mod timers;

pub use document::Document;
pub use markup::build_document;
pub use timers::{TimerId, TimerTask};

use std::fmt;
use std::time::Duration;

/// Attribute names that make up the page contract
pub mod attr {
    /// Accessibility flag on the toggle control
    pub const ARIA_EXPANDED: &str = "aria-expanded";
    /// Category label on category controls and menu items
    pub const DATA_CATEGORY: &str = "data-category";
    /// Human readable label of an element
    pub const LABEL: &str = "label";
}

/// Category label of the "show everything" control
pub const ALL_CATEGORIES: &str = "all";

/// Inline style properties the controller writes
pub mod style {
    pub const DISPLAY: &str = "display";
    pub const OVERFLOW: &str = "overflow";
}

/// Identity of an element on the page
///
/// Indexed variants are numbered in document order starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    Body,
    Header,
    NavToggle,
    NavMenu,
    NavLink(usize),
    CategoryButton(usize),
    MenuItem(usize),
}

impl ElementId {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementId::Body => ElementKind::Body,
            ElementId::Header => ElementKind::Header,
            ElementId::NavToggle => ElementKind::NavToggle,
            ElementId::NavMenu => ElementKind::NavMenu,
            ElementId::NavLink(_) => ElementKind::NavLink,
            ElementId::CategoryButton(_) => ElementKind::CategoryButton,
            ElementId::MenuItem(_) => ElementKind::MenuItem,
        }
    }

    /// Whether the element belongs to the navigation region
    ///
    /// Clicks on any of these never count as "outside" the navigation.
    pub fn in_navigation(&self) -> bool {
        matches!(
            self,
            ElementId::NavToggle | ElementId::NavMenu | ElementId::NavLink(_)
        )
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Body => write!(f, "body"),
            ElementId::Header => write!(f, "#header"),
            ElementId::NavToggle => write!(f, "#navToggle"),
            ElementId::NavMenu => write!(f, "#navMenu"),
            ElementId::NavLink(i) => write!(f, ".nav-menu a[{}]", i),
            ElementId::CategoryButton(i) => write!(f, ".category-btn[{}]", i),
            ElementId::MenuItem(i) => write!(f, ".menu-item[{}]", i),
        }
    }
}

/// Element kinds, used for `query_all`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Body,
    Header,
    NavToggle,
    NavMenu,
    NavLink,
    CategoryButton,
    MenuItem,
}

/// Visual state classes observable by the stylesheet (here: the renderer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateClass {
    Active,
    Scrolled,
    Hidden,
    Visible,
    Touch,
}

impl StateClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateClass::Active => "active",
            StateClass::Scrolled => "scrolled",
            StateClass::Hidden => "hidden",
            StateClass::Visible => "visible",
            StateClass::Touch => "touch",
        }
    }
}

impl fmt::Display for StateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the interaction logic needs from a rendering environment
///
/// Writes to elements that do not exist are silently ignored, reads return
/// the empty answer.
pub trait View {
    /// Whether the element is present on the page
    fn contains(&self, id: ElementId) -> bool;

    /// All elements of a kind, in document order
    fn query_all(&self, kind: ElementKind) -> Vec<ElementId>;

    fn attribute(&self, id: ElementId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str);

    fn has_class(&self, id: ElementId, class: StateClass) -> bool;

    /// Add (`on == true`) or remove a state class
    fn set_class(&mut self, id: ElementId, class: StateClass, on: bool);

    /// Set an inline style property, or clear it with `None`
    fn set_style(&mut self, id: ElementId, property: &str, value: Option<&str>);

    fn focus(&mut self, id: ElementId);

    /// Current vertical scroll offset of the page, in logical pixels
    fn scroll_y(&self) -> u32;

    /// Request a single callback before the next repaint
    fn schedule_frame(&mut self);

    /// Run `task` once after `delay`
    fn set_timer(&mut self, delay: Duration, task: TimerTask) -> TimerId;

    /// Cancel a pending timer; unknown or already fired ids are ignored
    fn cancel_timer(&mut self, id: TimerId);
}
