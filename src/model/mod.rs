//! Model layer - static page content
//!
//! Interaction state lives in `page`; this module only holds what the page
//! displays.

pub mod menu;

pub use menu::Menu;
