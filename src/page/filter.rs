//! Category filter with staggered show/hide
//!
//! Showing an item puts it back in layout at once and marks it visible after
//! [`SHOW_DELAY`]. Hiding drops `visible` at once and takes the item out of
//! layout after [`HIDE_DELAY`]. Each item has at most one pending timer; a new
//! pass cancels it before scheduling the next.

use crate::dom::{attr, style, ElementId, ElementKind, StateClass, TimerId, TimerTask, View};
use crate::dom::ALL_CATEGORIES;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, trace};

pub const SHOW_DELAY: Duration = Duration::from_millis(50);
pub const HIDE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct CategoryFilter {
    active: String,
    /// In-flight animation timer per menu item index
    pending: HashMap<usize, TimerId>,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            active: ALL_CATEGORIES.to_string(),
            pending: HashMap::new(),
        }
    }
}

#[cfg(test)]
impl CategoryFilter {
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Number of items with an animation still in flight
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }
}

impl CategoryFilter {
    /// Activate a category control and start filtering the items
    ///
    /// Unknown controls are ignored.
    pub fn select<V: View>(&mut self, view: &mut V, control: ElementId) {
        let controls = view.query_all(ElementKind::CategoryButton);
        if !controls.contains(&control) {
            return;
        }

        for other in controls {
            view.set_class(other, StateClass::Active, other == control);
        }

        let category = view
            .attribute(control, attr::DATA_CATEGORY)
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());
        debug!(from = %self.active, to = %category, "filtering menu");

        for item in view.query_all(ElementKind::MenuItem) {
            let ElementId::MenuItem(index) = item else {
                continue;
            };

            if let Some(timer) = self.pending.remove(&index) {
                trace!(%timer, index, "cancelling in-flight animation");
                view.cancel_timer(timer);
            }

            let matches = category == ALL_CATEGORIES
                || view.attribute(item, attr::DATA_CATEGORY).as_deref() == Some(category.as_str());

            let timer = if matches {
                view.set_style(item, style::DISPLAY, None);
                view.set_timer(SHOW_DELAY, TimerTask::RevealItem(index))
            } else {
                view.set_class(item, StateClass::Visible, false);
                view.set_timer(HIDE_DELAY, TimerTask::CollapseItem(index))
            };
            self.pending.insert(index, timer);
        }

        self.active = category;
    }

    /// Finish an item animation when its timer fires
    ///
    /// Timers that are no longer the item's current one are dropped.
    pub fn complete<V: View>(&mut self, view: &mut V, timer: TimerId, task: TimerTask) {
        let index = match task {
            TimerTask::RevealItem(i) | TimerTask::CollapseItem(i) => i,
        };
        if self.pending.get(&index) != Some(&timer) {
            return;
        }
        self.pending.remove(&index);

        let item = ElementId::MenuItem(index);
        match task {
            TimerTask::RevealItem(_) => view.set_class(item, StateClass::Visible, true),
            TimerTask::CollapseItem(_) => view.set_style(item, style::DISPLAY, Some("none")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn page(categories: &[&str]) -> Document {
        let mut doc = Document::new();
        doc.insert(ElementId::CategoryButton(0));
        doc.set_attribute(ElementId::CategoryButton(0), attr::DATA_CATEGORY, "all");
        doc.insert(ElementId::CategoryButton(1));
        doc.set_attribute(ElementId::CategoryButton(1), attr::DATA_CATEGORY, "Drinks");
        // No label: behaves like "all"
        doc.insert(ElementId::CategoryButton(2));

        for (i, category) in categories.iter().enumerate() {
            doc.insert(ElementId::MenuItem(i));
            doc.set_attribute(ElementId::MenuItem(i), attr::DATA_CATEGORY, category);
            doc.set_class(ElementId::MenuItem(i), StateClass::Visible, true);
        }
        doc
    }

    fn settle(filter: &mut CategoryFilter, doc: &mut Document, elapsed: Duration) {
        for (timer, task) in doc.advance_by(elapsed) {
            filter.complete(doc, timer, task);
        }
    }

    fn visible(doc: &Document, n: usize) -> Vec<bool> {
        (0..n)
            .map(|i| doc.has_class(ElementId::MenuItem(i), StateClass::Visible))
            .collect()
    }

    #[test]
    fn test_control_selection_is_exclusive() {
        let mut doc = page(&[]);
        let mut filter = CategoryFilter::default();

        filter.select(&mut doc, ElementId::CategoryButton(1));
        assert!(!doc.has_class(ElementId::CategoryButton(0), StateClass::Active));
        assert!(doc.has_class(ElementId::CategoryButton(1), StateClass::Active));
        assert_eq!(filter.active(), "Drinks");

        filter.select(&mut doc, ElementId::CategoryButton(2));
        assert!(!doc.has_class(ElementId::CategoryButton(1), StateClass::Active));
        assert!(doc.has_class(ElementId::CategoryButton(2), StateClass::Active));
        assert_eq!(filter.active(), "all");
    }

    #[test]
    fn test_hidden_items_leave_layout_after_exit_delay() {
        let mut doc = page(&["Drinks", "Food"]);
        let mut filter = CategoryFilter::default();

        filter.select(&mut doc, ElementId::CategoryButton(1));
        // Exit starts immediately, layout is kept while it plays
        assert!(!doc.has_class(ElementId::MenuItem(1), StateClass::Visible));
        assert!(doc.is_displayed(ElementId::MenuItem(1)));

        settle(&mut filter, &mut doc, Duration::from_millis(299));
        assert!(doc.is_displayed(ElementId::MenuItem(1)));

        settle(&mut filter, &mut doc, Duration::from_millis(1));
        assert!(!doc.is_displayed(ElementId::MenuItem(1)));
        assert_eq!(filter.in_flight(), 0);
    }

    #[test]
    fn test_shown_items_enter_after_settle_delay() {
        let mut doc = page(&["Drinks", "Food"]);
        let mut filter = CategoryFilter::default();

        filter.select(&mut doc, ElementId::CategoryButton(1));
        settle(&mut filter, &mut doc, HIDE_DELAY);

        filter.select(&mut doc, ElementId::CategoryButton(0));
        // Back in layout right away, visible only once the delay elapses
        assert!(doc.is_displayed(ElementId::MenuItem(1)));
        assert!(!doc.has_class(ElementId::MenuItem(1), StateClass::Visible));

        settle(&mut filter, &mut doc, SHOW_DELAY);
        assert_eq!(visible(&doc, 2), vec![true, true]);
    }

    #[test]
    fn test_rapid_refilter_cancels_pending_collapse() {
        let mut doc = page(&["Drinks", "Food"]);
        let mut filter = CategoryFilter::default();

        filter.select(&mut doc, ElementId::CategoryButton(1));
        settle(&mut filter, &mut doc, Duration::from_millis(100));
        filter.select(&mut doc, ElementId::CategoryButton(0));

        // The first pass's collapse of "Food" would have fired at 300ms
        settle(&mut filter, &mut doc, Duration::from_millis(500));
        assert!(doc.is_displayed(ElementId::MenuItem(1)));
        assert_eq!(visible(&doc, 2), vec![true, true]);
        assert!(doc.timers().is_empty());
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut doc = page(&["Food"]);
        let mut filter = CategoryFilter::default();

        filter.select(&mut doc, ElementId::CategoryButton(1));
        let stale = doc.set_timer(Duration::ZERO, TimerTask::CollapseItem(0));
        filter.select(&mut doc, ElementId::CategoryButton(0));

        filter.complete(&mut doc, stale, TimerTask::CollapseItem(0));
        assert!(doc.is_displayed(ElementId::MenuItem(0)));
        assert_eq!(filter.in_flight(), 1);
    }

    #[test]
    fn test_unknown_control_is_ignored() {
        let mut doc = page(&["Food"]);
        let mut filter = CategoryFilter::default();

        filter.select(&mut doc, ElementId::CategoryButton(9));
        assert_eq!(filter.active(), "all");
        assert!(doc.timers().is_empty());
    }

    #[test]
    fn test_empty_menu_is_a_no_op() {
        let mut doc = page(&[]);
        let mut filter = CategoryFilter::default();

        filter.select(&mut doc, ElementId::CategoryButton(1));
        assert_eq!(filter.in_flight(), 0);
        assert!(doc.timers().is_empty());
    }
}
