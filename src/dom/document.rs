//! In-memory document implementing [`View`]

use super::timers::{TimerId, TimerQueue, TimerTask};
use super::{style, ElementId, ElementKind, StateClass, View};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// State carried by a single element
#[derive(Debug, Clone, Default)]
pub struct Element {
    classes: BTreeSet<StateClass>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
}

/// The page: elements, focus, scroll position and scheduled callbacks
#[derive(Debug, Default)]
pub struct Document {
    elements: BTreeMap<ElementId, Element>,
    focused: Option<ElementId>,
    scroll_y: u32,
    frame_requested: bool,
    timers: TimerQueue,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element (no-op if it already exists)
    pub fn insert(&mut self, id: ElementId) -> &mut Self {
        self.elements.entry(id).or_default();
        self
    }

    /// Read an inline style property
    pub fn inline_style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.elements
            .get(&id)
            .and_then(|e| e.styles.get(property))
            .map(|s| s.as_str())
    }

    /// Whether the element participates in layout (no `display: none`)
    pub fn is_displayed(&self, id: ElementId) -> bool {
        self.contains(id) && self.inline_style(id, style::DISPLAY) != Some("none")
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Scroll the page; the controller is notified separately
    pub fn set_scroll_y(&mut self, offset: u32) {
        self.scroll_y = offset;
    }

    /// Consume a pending frame request
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    /// Advance the document clock, returning timers that came due
    pub fn advance_to(&mut self, now: Duration) -> Vec<(TimerId, TimerTask)> {
        self.timers.advance_to(now)
    }
}

#[cfg(test)]
impl Document {
    pub fn remove(&mut self, id: ElementId) {
        self.elements.remove(&id);
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    pub fn advance_by(&mut self, elapsed: Duration) -> Vec<(TimerId, TimerTask)> {
        self.timers.advance_by(elapsed)
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }
}

impl View for Document {
    fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    fn query_all(&self, kind: ElementKind) -> Vec<ElementId> {
        self.elements
            .keys()
            .filter(|id| id.kind() == kind)
            .copied()
            .collect()
    }

    fn attribute(&self, id: ElementId, name: &str) -> Option<String> {
        self.elements.get(&id)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn has_class(&self, id: ElementId, class: StateClass) -> bool {
        self.elements
            .get(&id)
            .map(|e| e.classes.contains(&class))
            .unwrap_or(false)
    }

    fn set_class(&mut self, id: ElementId, class: StateClass, on: bool) {
        if let Some(element) = self.elements.get_mut(&id) {
            if on {
                element.classes.insert(class);
            } else {
                element.classes.remove(&class);
            }
        }
    }

    fn set_style(&mut self, id: ElementId, property: &str, value: Option<&str>) {
        if let Some(element) = self.elements.get_mut(&id) {
            match value {
                Some(v) => {
                    element.styles.insert(property.to_string(), v.to_string());
                }
                None => {
                    element.styles.remove(property);
                }
            }
        }
    }

    fn focus(&mut self, id: ElementId) {
        if self.contains(id) {
            self.focused = Some(id);
        }
    }

    fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    fn schedule_frame(&mut self) {
        self.frame_requested = true;
    }

    fn set_timer(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        self.timers.schedule(delay, task)
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.timers.cancel(id);
    }
}
