//! bistro-tui - A restaurant page in the terminal
//!
//! This is the main entry point. The page interaction logic lives in
//! `page`, the document it manipulates in `dom`; the rest is the terminal
//! host using the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod dom;
mod error;
mod logging;
mod model;
mod page;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::Menu;
use crate::page::Capabilities;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let log_path = logging::init(&config.log_level);
    info!(log = ?log_path, "starting bistro-tui");

    // First run: write the defaults out so they can be edited
    if Config::load().is_none() {
        if let Err(e) = config.save() {
            warn!(error = %e, "could not write default config");
        }
    }

    // Menu: CLI argument, then configured path, then the built-in sample
    let menu_path = std::env::args().nth(1).or_else(|| config.menu_path.clone());
    let menu = match &menu_path {
        Some(path) => Menu::load(path).with_context(|| format!("Failed to load menu {}", path))?,
        None => Menu::sample(),
    };
    info!(name = %menu.name, items = menu.items.len(), "menu loaded");

    let capabilities = Capabilities::detect(config.touch);
    let mut app = App::new(menu, config.clone(), capabilities)?;
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_frame_interval(config.frame_interval());
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!(error = ?err, "terminated with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("bye");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    let (width, height) = tui.size()?;
    app.update(Action::Resize(width, height))?;

    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        }

        // Timers and the frame callback run every iteration, so a burst of
        // input cannot starve them
        app.update(Action::Tick)?;
    }

    Ok(())
}
