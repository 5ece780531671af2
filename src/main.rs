//! workspace-tui - A terminal dashboard with a docking panel workspace
//!
//! This is the main entry point for the workspace-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::PresetRegistry;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    Tui::install_panic_hook();

    let (config, config_error) = Config::load_or_create();
    // Held until exit so buffered log lines are flushed
    let _log_guard = logging::init(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    if let Some(error) = config_error {
        tracing::warn!(error = %format!("{:#}", error), "using default config");
    }

    let registry = load_presets(&config)?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    // Create app state
    let mut app = App::new(config, registry);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "application error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Built-in presets plus the optional user presets file
fn load_presets(config: &Config) -> Result<PresetRegistry> {
    let mut registry = PresetRegistry::builtin().context("built-in layout presets are invalid")?;
    if let Some(ref path) = config.layouts_file {
        match registry.load_file(path) {
            Ok(added) => tracing::info!(added, path = %path.display(), "loaded user presets"),
            Err(error) => tracing::warn!(%error, "ignoring user presets"),
        }
    }
    tracing::debug!(presets = ?registry.names(), "layout presets ready");
    Ok(registry)
}

/// Process an action and every follow-up action it produces
fn dispatch(app: &mut App, action: Action) -> Result<()> {
    let mut current_action = Some(action);
    while let Some(a) = current_action {
        current_action = app.update(a)?;
    }
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "draw error");
            }
        })?;

        // Scheduled actions (the initial preset selection) run after the
        // loading frame and are redrawn without waiting for input
        if let Some(action) = app.next_pending() {
            dispatch(app, action)?;
            while let Some(action) = app.next_pending() {
                dispatch(app, action)?;
            }
            continue;
        }

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            if let Some(action) = action {
                tracing::trace!(%action, "dispatch");
                dispatch(app, action)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
