// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Slovo - Main Entry Point
//!
//! A small template-driven word processor. Built with Rust and egui.

mod app;
mod config;
mod document;
mod error;
mod export;
mod files;
mod state;
mod templates;
mod ui;

use app::SlovoApp;
use config::load_config;
use log::{info, warn};
use std::path::Path;
use ui::get_app_icon;

/// Application name constant.
const APP_NAME: &str = "Slovo";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    // Materialize the template store next to the executable. Template loss
    // is not fatal: the editor still works as a blank text surface.
    match templates::ensure_templates(Path::new(".")) {
        Ok(written) if written > 0 => info!("Template store ready ({} new)", written),
        Ok(_) => info!("Template store ready"),
        Err(e) => warn!("Could not prepare template store: {}", e),
    }

    // Load settings to get window configuration
    let settings = load_config();
    let window_size = settings.window_size;

    info!(
        "Window configuration: {}x{}",
        window_size.width, window_size.height
    );

    // Load application icon from the icons directory, if present
    let app_icon = get_app_icon();

    // Configure the native window options
    let mut viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([400.0, 300.0]);

    if let Some(icon) = app_icon {
        viewport = viewport.with_icon(icon);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(SlovoApp::new(cc, settings)))),
    )
}
