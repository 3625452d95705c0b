//! Builds the page document for a menu
//!
//! This is the markup side of the contract: which elements exist, their
//! category labels, and the state they start in.

use super::{attr, Document, ElementId, StateClass, View, ALL_CATEGORIES};
use crate::model::Menu;
use tracing::warn;

pub fn build_document(menu: &Menu) -> Document {
    let mut doc = Document::new();

    doc.insert(ElementId::Body)
        .insert(ElementId::Header)
        .insert(ElementId::NavToggle)
        .insert(ElementId::NavMenu);

    doc.set_attribute(ElementId::Header, attr::LABEL, &menu.name);
    doc.set_attribute(ElementId::NavToggle, attr::ARIA_EXPANDED, "false");
    doc.set_attribute(ElementId::NavToggle, attr::LABEL, "Toggle navigation");

    for (i, link) in menu.links.iter().enumerate() {
        let id = ElementId::NavLink(i);
        doc.insert(id);
        doc.set_attribute(id, attr::LABEL, &link.label);
    }

    // "All" first, then one control per category
    let all = ElementId::CategoryButton(0);
    doc.insert(all);
    doc.set_attribute(all, attr::DATA_CATEGORY, ALL_CATEGORIES);
    doc.set_attribute(all, attr::LABEL, "All");
    doc.set_class(all, StateClass::Active, true);

    // The "all" value belongs to the control above; items tagged with it
    // show only under that control
    let categories = menu.categories();
    if categories.iter().any(|c| c == ALL_CATEGORIES) {
        warn!(category = ALL_CATEGORIES, "reserved category name skipped");
    }
    let filterable = categories.iter().filter(|c| c.as_str() != ALL_CATEGORIES);

    for (i, category) in filterable.enumerate() {
        let id = ElementId::CategoryButton(i + 1);
        doc.insert(id);
        doc.set_attribute(id, attr::DATA_CATEGORY, category);
        doc.set_attribute(id, attr::LABEL, category);
    }

    for (i, item) in menu.items.iter().enumerate() {
        let id = ElementId::MenuItem(i);
        doc.insert(id);
        doc.set_attribute(id, attr::DATA_CATEGORY, &item.category);
        doc.set_attribute(id, attr::LABEL, &item.name);
        doc.set_class(id, StateClass::Visible, true);
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementKind;

    #[test]
    fn test_document_mirrors_menu() {
        let menu = Menu::sample();
        let doc = build_document(&menu);

        assert_eq!(doc.query_all(ElementKind::NavLink).len(), menu.links.len());
        assert_eq!(
            doc.query_all(ElementKind::CategoryButton).len(),
            menu.categories().len() + 1
        );
        assert_eq!(doc.query_all(ElementKind::MenuItem).len(), menu.items.len());
        assert_eq!(
            doc.attribute(ElementId::MenuItem(7), attr::DATA_CATEGORY).as_deref(),
            Some("Drinks")
        );
    }

    #[test]
    fn test_initial_state() {
        let doc = build_document(&Menu::sample());

        assert_eq!(
            doc.attribute(ElementId::NavToggle, attr::ARIA_EXPANDED).as_deref(),
            Some("false")
        );
        assert!(!doc.has_class(ElementId::NavMenu, StateClass::Active));
        assert!(doc.has_class(ElementId::CategoryButton(0), StateClass::Active));
        assert!(!doc.has_class(ElementId::CategoryButton(1), StateClass::Active));
        assert!(doc
            .query_all(ElementKind::MenuItem)
            .into_iter()
            .all(|id| doc.has_class(id, StateClass::Visible) && doc.is_displayed(id)));
    }

    #[test]
    fn test_reserved_category_gets_no_control() {
        let mut menu = Menu::sample();
        menu.items.truncate(2);
        menu.items[0].category = ALL_CATEGORIES.to_string();
        menu.items[1].category = "Mains".to_string();
        let doc = build_document(&menu);

        assert_eq!(doc.query_all(ElementKind::CategoryButton).len(), 2);
        assert_eq!(
            doc.attribute(ElementId::CategoryButton(1), attr::DATA_CATEGORY).as_deref(),
            Some("Mains")
        );
    }
}
