//! Native file dialog integration using the rfd crate
//!
//! This module provides functions to open native file picker dialogs
//! for opening and saving plain text documents.

use rfd::FileDialog;
use std::path::PathBuf;

/// File extension filter for the documents Slovo reads and writes.
const TEXT_EXTENSIONS: &[&str] = &["txt", "text"];

/// Opens a native file dialog for selecting a text file to open.
///
/// Returns `Some(PathBuf)` if a file was selected, `None` if cancelled.
pub fn open_file_dialog(initial_dir: Option<&PathBuf>) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Открыть файл")
        .add_filter("Text files", TEXT_EXTENSIONS)
        .add_filter("All files", &["*"]);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file()
}

/// Opens a native save dialog for choosing where to write the document.
///
/// Returns `Some(PathBuf)` if a location was selected, `None` if cancelled.
pub fn save_file_dialog(
    initial_dir: Option<&PathBuf>,
    default_name: Option<&str>,
) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Сохранить файл")
        .add_filter("Text files", TEXT_EXTENSIONS)
        .add_filter("All files", &["*"]);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    if let Some(name) = default_name {
        dialog = dialog.set_file_name(name);
    }

    dialog.save_file()
}
