//! Template gallery view
//!
//! A grid of fixed-size tiles, one per catalog entry, each showing a
//! glyph above its Russian label. A PNG dropped into `icons/` under the
//! template's file stem replaces the glyph on that tile.

use crate::templates::{TemplateKind, ICONS_DIR};
use crate::ui::icons::load_tile_image;
use eframe::egui::{self, Color32, TextureHandle, TextureOptions, Ui, Vec2};
use std::collections::HashMap;
use std::path::Path;

/// Tile dimensions, matching the original gallery buttons.
const TILE_SIZE: Vec2 = Vec2::new(200.0, 150.0);

/// Tiles per row before wrapping.
const COLUMNS: usize = 4;

/// Edge length of a PNG tile icon.
const TILE_ICON_SIZE: f32 = 48.0;

/// The gallery view with its lazily loaded tile icon cache.
pub struct Gallery {
    icon_cache: HashMap<TemplateKind, Option<TextureHandle>>,
    icons_loaded: bool,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            icon_cache: HashMap::new(),
            icons_loaded: false,
        }
    }

    /// Render the gallery grid; returns the clicked template, if any.
    pub fn show(&mut self, ui: &mut Ui) -> Option<TemplateKind> {
        self.load_icons_once(ui.ctx());

        let mut selected = None;
        let is_dark = ui.visuals().dark_mode;

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.spacing_mut().item_spacing = Vec2::splat(20.0);

            for row in TemplateKind::ALL.chunks(COLUMNS) {
                ui.horizontal(|ui| {
                    for kind in row {
                        let icon = self.icon_cache.get(kind).and_then(|t| t.clone());
                        if template_tile(ui, *kind, icon.as_ref(), is_dark).clicked() {
                            selected = Some(*kind);
                        }
                    }
                });
            }
        });

        selected
    }

    /// Populate the tile icon cache from `icons/` on the first frame.
    fn load_icons_once(&mut self, ctx: &egui::Context) {
        if self.icons_loaded {
            return;
        }
        self.icons_loaded = true;

        for kind in TemplateKind::ALL {
            let Some(stem) = kind.file_name().map(|n| n.trim_end_matches(".txt")) else {
                self.icon_cache.insert(kind, None);
                continue;
            };
            let path = Path::new(ICONS_DIR).join(format!("{}.png", stem));
            let texture = load_tile_image(&path).map(|img| {
                ctx.load_texture(format!("tile-{}", stem), img, TextureOptions::LINEAR)
            });
            self.icon_cache.insert(kind, texture);
        }
    }
}

/// Render one gallery tile: glyph (or PNG icon) above the label.
fn template_tile(
    ui: &mut Ui,
    kind: TemplateKind,
    icon: Option<&TextureHandle>,
    is_dark: bool,
) -> egui::Response {
    let (tile_bg, border, label_color) = if is_dark {
        (
            Color32::from_rgb(45, 45, 48),
            Color32::from_rgb(70, 70, 75),
            Color32::from_rgb(200, 200, 200),
        )
    } else {
        (
            Color32::WHITE,
            Color32::from_rgb(221, 221, 221),
            Color32::from_rgb(68, 68, 68),
        )
    };
    let hover_border = if is_dark {
        Color32::from_rgb(120, 120, 130)
    } else {
        Color32::from_rgb(153, 153, 153)
    };

    let btn = ui.add(
        egui::Button::new("")
            .frame(false)
            .min_size(TILE_SIZE),
    );

    let stroke_color = if btn.hovered() { hover_border } else { border };
    ui.painter()
        .rect_filled(btn.rect, egui::Rounding::same(4.0), tile_bg);
    ui.painter().rect_stroke(
        btn.rect,
        egui::Rounding::same(4.0),
        egui::Stroke::new(1.0, stroke_color),
    );

    let glyph_pos = btn.rect.center() - Vec2::new(0.0, 24.0);
    if let Some(texture) = icon {
        let icon_rect = egui::Rect::from_center_size(glyph_pos, Vec2::splat(TILE_ICON_SIZE));
        ui.painter().image(
            texture.id(),
            icon_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    } else {
        ui.painter().text(
            glyph_pos,
            egui::Align2::CENTER_CENTER,
            kind.glyph(),
            egui::FontId::proportional(32.0),
            label_color,
        );
    }

    ui.painter().text(
        btn.rect.center() + Vec2::new(0.0, 40.0),
        egui::Align2::CENTER_CENTER,
        kind.label(),
        egui::FontId::proportional(12.0),
        label_color,
    );

    btn.on_hover_text(kind.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_rows_cover_all_templates() {
        let tiles: usize = TemplateKind::ALL.chunks(COLUMNS).map(|c| c.len()).sum();
        assert_eq!(tiles, TemplateKind::ALL.len());
    }

    #[test]
    fn test_gallery_starts_without_cached_icons() {
        let gallery = Gallery::new();
        assert!(!gallery.icons_loaded);
        assert!(gallery.icon_cache.is_empty());
    }
}
