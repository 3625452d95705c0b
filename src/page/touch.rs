//! Touch capability detection
//!
//! Checked once at startup. The `touch` class on the body tells the renderer
//! to skip hover-only affordances.

use crate::dom::{ElementId, StateClass, View};
use std::env;

/// Environment variable carrying the number of touch points of the terminal
pub const TOUCH_POINTS_ENV: &str = "BISTRO_TOUCH_POINTS";

/// Input capabilities of the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Touch events are delivered
    pub touch_events: bool,
    /// Maximum simultaneous touch points reported by the host
    pub max_touch_points: u32,
}

impl Capabilities {
    pub fn supports_touch(&self) -> bool {
        self.touch_events || self.max_touch_points > 0
    }

    /// Resolve capabilities from a configuration override or the environment
    pub fn detect(touch_override: Option<bool>) -> Self {
        match touch_override {
            Some(touch_events) => Self {
                touch_events,
                max_touch_points: 0,
            },
            None => Self::from_touch_points(env::var(TOUCH_POINTS_ENV).ok().as_deref()),
        }
    }

    /// Parse a touch-point count; anything unparsable counts as zero
    pub fn from_touch_points(value: Option<&str>) -> Self {
        let max_touch_points = value
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(0);
        Self {
            touch_events: false,
            max_touch_points,
        }
    }
}

/// Mark the body when touch input is available
pub fn apply<V: View>(view: &mut V, capabilities: &Capabilities) -> bool {
    let touch = capabilities.supports_touch();
    if touch {
        view.set_class(ElementId::Body, StateClass::Touch, true);
    }
    touch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn test_either_signal_enables_touch() {
        assert!(!Capabilities::default().supports_touch());
        let events = Capabilities {
            touch_events: true,
            max_touch_points: 0,
        };
        assert!(events.supports_touch());

        let points = Capabilities {
            touch_events: false,
            max_touch_points: 5,
        };
        assert!(points.supports_touch());
    }

    #[test]
    fn test_touch_points_parsing() {
        assert_eq!(Capabilities::from_touch_points(Some("10")).max_touch_points, 10);
        assert_eq!(Capabilities::from_touch_points(Some(" 2 ")).max_touch_points, 2);
        assert_eq!(Capabilities::from_touch_points(Some("many")).max_touch_points, 0);
        assert_eq!(Capabilities::from_touch_points(None).max_touch_points, 0);
    }

    #[test]
    fn test_override_wins() {
        assert!(Capabilities::detect(Some(true)).supports_touch());
        assert!(!Capabilities::detect(Some(false)).supports_touch());
    }

    #[test]
    fn test_apply_marks_body() {
        let mut doc = Document::new();
        doc.insert(ElementId::Body);

        assert!(!apply(&mut doc, &Capabilities::default()));
        assert!(!doc.has_class(ElementId::Body, StateClass::Touch));

        let touch = Capabilities {
            touch_events: true,
            max_touch_points: 1,
        };
        assert!(apply(&mut doc, &touch));
        assert!(doc.has_class(ElementId::Body, StateClass::Touch));
    }
}
