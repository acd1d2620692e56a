//! Character-run formatting attributes

use egui::{Color32, FontFamily, FontId};

/// Smallest selectable point size (matches the toolbar spinner range).
pub const MIN_FONT_SIZE: f32 = 1.0;

/// Largest selectable point size.
pub const MAX_FONT_SIZE: f32 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Font Family Choice
// ─────────────────────────────────────────────────────────────────────────────

/// Font families selectable in the toolbar.
///
/// egui renders only the families registered with the context, so the
/// combo offers the two stock families rather than enumerating OS fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontChoice {
    /// Proportional text face (default)
    #[default]
    Sans,
    /// Monospace text face
    Mono,
}

impl FontChoice {
    /// All selectable families, combo-box order.
    pub const ALL: [FontChoice; 2] = [FontChoice::Sans, FontChoice::Mono];

    /// Display name for the toolbar combo box.
    pub fn display_name(&self) -> &'static str {
        match self {
            FontChoice::Sans => "Sans",
            FontChoice::Mono => "Mono",
        }
    }

    /// The egui font family this choice renders with.
    pub fn family(&self) -> FontFamily {
        match self {
            FontChoice::Sans => FontFamily::Proportional,
            FontChoice::Mono => FontFamily::Monospace,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Character Style
// ─────────────────────────────────────────────────────────────────────────────

/// Formatting attributes of one character run.
///
/// `color` uses `Color32::PLACEHOLDER` as a sentinel for "theme text
/// color", resolved at layout time so documents look right in both light
/// and dark visuals until the user explicitly picks a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharStyle {
    pub font: FontChoice,
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Color32,
}

impl Default for CharStyle {
    fn default() -> Self {
        Self {
            font: FontChoice::Sans,
            size: 12.0,
            bold: false,
            italic: false,
            underline: false,
            color: Color32::PLACEHOLDER,
        }
    }
}

impl CharStyle {
    /// Assign a point size, clamped to the toolbar's selectable range.
    pub fn set_size(&mut self, size: f32) {
        self.size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// The foreground color to render with, resolving the theme sentinel.
    pub fn resolved_color(&self, default_color: Color32) -> Color32 {
        if self.color == Color32::PLACEHOLDER {
            default_color
        } else {
            self.color
        }
    }

    /// Build the egui text format for this run.
    ///
    /// Italic uses egui's fake skew; underline is a 1px stroke in the text
    /// color. The stock egui fonts ship no bold weight, so bold runs keep
    /// the regular face on screen (the print path emits real `<b>`).
    pub fn text_format(&self, default_color: Color32) -> egui::TextFormat {
        let color = self.resolved_color(default_color);
        egui::TextFormat {
            font_id: FontId::new(self.size, self.font.family()),
            color,
            italics: self.italic,
            underline: if self.underline {
                egui::Stroke::new(1.0, color)
            } else {
                egui::Stroke::NONE
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = CharStyle::default();
        assert_eq!(style.font, FontChoice::Sans);
        assert_eq!(style.size, 12.0);
        assert!(!style.bold && !style.italic && !style.underline);
        assert_eq!(style.color, Color32::PLACEHOLDER);
    }

    #[test]
    fn test_set_size_clamps_to_spinner_range() {
        let mut style = CharStyle::default();
        style.set_size(0.0);
        assert_eq!(style.size, MIN_FONT_SIZE);
        style.set_size(500.0);
        assert_eq!(style.size, MAX_FONT_SIZE);
        style.set_size(42.0);
        assert_eq!(style.size, 42.0);
    }

    #[test]
    fn test_resolved_color_sentinel() {
        let mut style = CharStyle::default();
        assert_eq!(style.resolved_color(Color32::WHITE), Color32::WHITE);
        style.color = Color32::RED;
        assert_eq!(style.resolved_color(Color32::WHITE), Color32::RED);
    }

    #[test]
    fn test_text_format_attributes() {
        let mut style = CharStyle::default();
        style.italic = true;
        style.underline = true;
        style.size = 18.0;
        style.font = FontChoice::Mono;

        let format = style.text_format(Color32::BLACK);
        assert!(format.italics);
        assert_eq!(format.underline.color, Color32::BLACK);
        assert_eq!(format.font_id.size, 18.0);
        assert_eq!(format.font_id.family, FontFamily::Monospace);
    }
}
