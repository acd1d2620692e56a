//! Icon loading utilities for Slovo
//!
//! The `icons/` directory next to the executable is reserved for custom
//! assets; nothing is bundled into the binary. Helpers here decode a PNG
//! into a window icon or a gallery tile image, degrading to `None` on
//! any failure.

use crate::templates::ICONS_DIR;
use eframe::egui;
use std::path::Path;
use std::sync::Arc;

/// Decode PNG bytes into `egui::IconData` for the window icon.
fn load_icon_from_png(png_data: &[u8]) -> Option<egui::IconData> {
    let image = image::load_from_memory(png_data).ok()?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

/// Decode a PNG file into a `ColorImage` for a gallery tile.
///
/// Returns `None` if the file is absent or not decodable.
pub fn load_tile_image(path: &Path) -> Option<egui::ColorImage> {
    let data = std::fs::read(path).ok()?;
    let image = image::load_from_memory(&data).ok()?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    Some(egui::ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        rgba.as_raw(),
    ))
}

/// Get the application window icon.
///
/// Looks for a user-provided PNG under `icons/`; falls back to the
/// toolkit default when none decodes.
pub fn get_app_icon() -> Option<Arc<egui::IconData>> {
    let icon_paths = ["app.png", "slovo.png", "icon.png"];

    for name in &icon_paths {
        let path = Path::new(ICONS_DIR).join(name);
        if path.exists() {
            if let Some(icon) = std::fs::read(&path).ok().and_then(|d| load_icon_from_png(&d)) {
                log::info!("Loaded application icon from: {}", path.display());
                return Some(Arc::new(icon));
            }
        }
    }

    log::debug!("No application icon found, using default");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_icon_from_png_invalid_data() {
        let invalid_data = b"not a png file";
        assert!(load_icon_from_png(invalid_data).is_none());
    }

    #[test]
    fn test_load_tile_image_nonexistent() {
        let path = Path::new("nonexistent_icon.png");
        assert!(load_tile_image(path).is_none());
    }
}
