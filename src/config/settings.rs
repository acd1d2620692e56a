//! User settings for Slovo
//!
//! This module defines the `Settings` struct that holds the few
//! user-configurable options, with serde support for JSON loading.
//! Settings are read once at startup and never persisted by the app;
//! the config file exists only for users who create it by hand.

use crate::document::{FontChoice, MAX_FONT_SIZE, MIN_FONT_SIZE};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Initial window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// All user-configurable options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial window size
    pub window_size: WindowSize,
    /// Font family new documents start with
    pub default_font: FontChoice,
    /// Point size new documents start with
    pub default_font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: WindowSize::default(),
            default_font: FontChoice::Sans,
            default_font_size: 12.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, clamping out-of-range values back to
    /// usable defaults instead of failing.
    pub fn from_json_sanitized(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Clamp fields a hand-edited config file may have pushed out of range.
    fn sanitize(&mut self) {
        if !self.default_font_size.is_finite()
            || self.default_font_size < MIN_FONT_SIZE
            || self.default_font_size > MAX_FONT_SIZE
        {
            self.default_font_size = Settings::default().default_font_size;
        }
        if !self.window_size.width.is_finite() || self.window_size.width < 400.0 {
            self.window_size.width = WindowSize::default().width;
        }
        if !self.window_size.height.is_finite() || self.window_size.height < 300.0 {
            self.window_size.height = WindowSize::default().height;
        }
    }
}
