//! Application state management for Slovo
//!
//! The central `AppState` owns everything the shell needs: the current
//! view, the in-memory document, the caret formatting, the selection, the
//! loaded settings, and the transient UI flags (modals, toast). It is
//! constructed once at startup and passed explicitly to every handler.

use crate::config::Settings;
use crate::document::{CharStyle, FontChoice, RichDocument};
use crate::error::{Error, Result};
use crate::templates::{read_template, TemplateKind};
use egui::Color32;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// View Mode
// ─────────────────────────────────────────────────────────────────────────────

/// The two screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The template gallery, shown first
    #[default]
    Gallery,
    /// The rich text editing surface
    Editor,
}

// ─────────────────────────────────────────────────────────────────────────────
// Transient UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Transient flags driving modals and the status bar.
#[derive(Debug, Default)]
pub struct UiState {
    /// Whether to show the error/warning modal
    pub show_error_modal: bool,
    /// Message for the modal
    pub error_message: String,
    /// Warning severity renders a softer title
    pub error_is_warning: bool,
    /// Temporary toast message (shown in the status bar)
    pub toast_message: Option<String>,
    /// When the toast message should expire (as seconds since app start)
    pub toast_expires_at: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state.
pub struct AppState {
    /// Which screen is visible
    pub view: View,
    /// The in-memory document; discarded without prompting on view switch
    pub doc: RichDocument,
    /// Formatting newly typed text inherits; the toolbar reflects it
    pub caret_style: CharStyle,
    /// Current selection as a normalized char range
    pub selection: Option<(usize, usize)>,
    /// Loaded (read-only) settings
    pub settings: Settings,
    /// Transient UI flags
    pub ui: UiState,
    /// The editor should grab keyboard focus next frame
    pub needs_focus: bool,
    /// Directory the template store lives under
    base_dir: PathBuf,
}

impl AppState {
    /// Create the state with the template store rooted at the working
    /// directory.
    pub fn new(settings: Settings) -> Self {
        Self::with_base_dir(settings, PathBuf::from("."))
    }

    /// Create the state with an explicit store root (tests).
    pub fn with_base_dir(settings: Settings, base_dir: PathBuf) -> Self {
        let caret_style = default_caret_style(&settings);
        Self {
            view: View::Gallery,
            doc: RichDocument::new(),
            caret_style,
            selection: None,
            settings,
            ui: UiState::default(),
            needs_focus: false,
            base_dir,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // View Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Open a template in the editor.
    ///
    /// "Новый документ" clears the document; any other entry replaces the
    /// content with its backing file. A missing file surfaces a warning,
    /// a read failure an error; the document is left unchanged in both
    /// cases. The view switches to the editor regardless of outcome.
    pub fn select_template(&mut self, kind: TemplateKind) {
        match kind {
            TemplateKind::NewDocument => {
                debug!("Opening empty document");
                self.doc.clear();
                self.reset_caret();
            }
            _ => match read_template(&self.base_dir, kind) {
                Ok(text) => {
                    debug!("Opening template {:?}", kind);
                    self.doc.replace_with(text, default_caret_style(&self.settings));
                    self.reset_caret();
                }
                Err(e) if e.is_warning() => {
                    self.show_warning(format!("Шаблон «{}» не найден", kind.label()));
                }
                Err(e) => {
                    self.show_error(format!("Не удалось открыть шаблон:\n{}", e));
                }
            },
        }

        self.view = View::Editor;
        self.needs_focus = true;
    }

    /// Return to the gallery. The in-memory document is discarded without
    /// any unsaved-changes prompt; re-selecting a template shows its
    /// pristine content.
    pub fn show_templates(&mut self) {
        self.view = View::Gallery;
        self.selection = None;
    }

    // ─────────────────────────────────────────────────────────────────────
    // File Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Read a file chosen in the open dialog, replacing the document.
    ///
    /// On failure the document is untouched, byte for byte.
    pub fn open_document(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Opened {}", path.display());
        self.doc
            .replace_with(text, default_caret_style(&self.settings));
        self.reset_caret();
        Ok(())
    }

    /// Write the document to a path chosen in the save dialog.
    ///
    /// Only the plain text is written; all character formatting is
    /// discarded on save.
    pub fn save_document(&self, path: &Path) -> Result<()> {
        fs::write(path, self.doc.plain_text()).map_err(|source| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Saved {}", path.display());
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Formatting Actions
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_font(&mut self, font: FontChoice) {
        self.apply_style(|s| s.font = font);
    }

    pub fn set_size(&mut self, size: f32) {
        self.apply_style(|s| s.set_size(size));
    }

    pub fn toggle_bold(&mut self) {
        let value = !self.caret_style.bold;
        self.apply_style(|s| s.bold = value);
    }

    pub fn toggle_italic(&mut self) {
        let value = !self.caret_style.italic;
        self.apply_style(|s| s.italic = value);
    }

    pub fn toggle_underline(&mut self) {
        let value = !self.caret_style.underline;
        self.apply_style(|s| s.underline = value);
    }

    pub fn set_color(&mut self, color: Color32) {
        self.apply_style(|s| s.color = color);
    }

    /// Apply a style mutation to the selection, or to the caret style
    /// alone when nothing is selected. The caret style follows the
    /// mutation either way so the toolbar highlight stays truthful.
    fn apply_style(&mut self, f: impl Fn(&mut CharStyle)) {
        if let Some((start, end)) = self.selection {
            if start < end {
                self.doc.apply(start..end, &f);
            }
        }
        f(&mut self.caret_style);
    }

    /// Re-read the caret style from the document after the cursor moved.
    pub fn refresh_caret_style(&mut self, cursor: (usize, usize)) {
        let (start, end) = cursor;
        // Style of the char before the caret, or of the first selected char.
        let idx = if start == end { start } else { start + 1 };
        if let Some(style) = self.doc.style_at(idx) {
            self.caret_style = style;
        }
    }

    fn reset_caret(&mut self) {
        self.caret_style = default_caret_style(&self.settings);
        self.selection = None;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────

    /// Show an error in a modal dialog.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.ui.error_message = message.into();
        self.ui.error_is_warning = false;
        self.ui.show_error_modal = true;
    }

    /// Show a warning in a modal dialog (softer title, same flow).
    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.ui.error_message = message.into();
        self.ui.error_is_warning = true;
        self.ui.show_error_modal = true;
    }

    /// Dismiss the error/warning modal.
    pub fn dismiss_error(&mut self) {
        self.ui.show_error_modal = false;
        self.ui.error_message.clear();
    }

    /// Show a transient status-bar message.
    pub fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Clear the toast once its time is up.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.ui.toast_message = None;
                self.ui.toast_expires_at = None;
            }
        }
    }
}

/// The formatting new documents and fresh caret positions start with.
fn default_caret_style(settings: &Settings) -> CharStyle {
    CharStyle {
        font: settings.default_font,
        size: settings.default_font_size,
        ..CharStyle::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::ensure_templates;
    use tempfile::TempDir;

    fn state_with_store() -> (AppState, TempDir) {
        let dir = TempDir::new().unwrap();
        ensure_templates(dir.path()).unwrap();
        let state = AppState::with_base_dir(Settings::default(), dir.path().to_path_buf());
        (state, dir)
    }

    #[test]
    fn test_initial_view_is_gallery() {
        let (state, _dir) = state_with_store();
        assert_eq!(state.view, View::Gallery);
        assert!(state.doc.is_empty());
    }

    #[test]
    fn test_select_template_loads_pristine_content() {
        let (mut state, _dir) = state_with_store();

        for kind in TemplateKind::ALL.iter().skip(1) {
            state.select_template(*kind);
            assert_eq!(state.view, View::Editor);
            assert_eq!(state.doc.text(), kind.content().unwrap());
            assert!(!state.ui.show_error_modal);
        }
    }

    #[test]
    fn test_select_new_document_clears_prior_state() {
        let (mut state, _dir) = state_with_store();
        state.select_template(TemplateKind::Resume);
        assert!(!state.doc.is_empty());

        state.select_template(TemplateKind::NewDocument);
        assert_eq!(state.view, View::Editor);
        assert!(state.doc.is_empty());
    }

    #[test]
    fn test_missing_template_warns_and_switches_view() {
        let dir = TempDir::new().unwrap();
        // No store materialization: every backing file is missing.
        let mut state = AppState::with_base_dir(Settings::default(), dir.path().to_path_buf());

        state.doc.replace_with("прежний текст", CharStyle::default());
        state.select_template(TemplateKind::Letter);

        // Warning surfaced, document unchanged, editor still entered.
        assert!(state.ui.show_error_modal);
        assert!(state.ui.error_is_warning);
        assert_eq!(state.doc.text(), "прежний текст");
        assert_eq!(state.view, View::Editor);
    }

    #[test]
    fn test_show_templates_then_reselect_discards_edits() {
        let (mut state, _dir) = state_with_store();

        state.select_template(TemplateKind::Resume);
        let pristine = state.doc.text().to_owned();
        assert!(pristine.starts_with("РЕЗЮМЕ"));

        // Type some extra text, then go back to the gallery.
        let edited = format!("{}\nдописанный текст", pristine);
        state.doc.sync_edit(&edited, state.caret_style);
        state.show_templates();
        assert_eq!(state.view, View::Gallery);

        // Re-selecting the same template shows the pristine skeleton.
        state.select_template(TemplateKind::Resume);
        assert_eq!(state.doc.text(), pristine);
    }

    #[test]
    fn test_open_missing_file_leaves_document_unchanged() {
        let (mut state, dir) = state_with_store();
        state.doc.replace_with("важный текст", CharStyle::default());
        let before = state.doc.clone();

        let err = state
            .open_document(&dir.path().join("нет-такого.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
        assert_eq!(state.doc, before);
    }

    #[test]
    fn test_save_then_open_round_trips_text_not_formatting() {
        let (mut state, dir) = state_with_store();
        state.doc.replace_with("жирная строка", CharStyle::default());
        state.selection = Some((0, 6));
        state.toggle_bold();
        assert!(state.doc.spans().iter().any(|s| s.style.bold));

        let path = dir.path().join("out.txt");
        state.save_document(&path).unwrap();
        state.open_document(&path).unwrap();

        // Text round-trips exactly; formatting never does.
        assert_eq!(state.doc.text(), "жирная строка");
        assert_eq!(state.doc.spans().len(), 1);
        assert!(!state.doc.spans()[0].style.bold);
    }

    #[test]
    fn test_toggle_without_selection_flips_caret_only() {
        let (mut state, _dir) = state_with_store();
        state.doc.replace_with("текст", CharStyle::default());
        state.selection = None;

        state.toggle_italic();
        assert!(state.caret_style.italic);
        assert!(state.doc.spans().iter().all(|s| !s.style.italic));

        state.toggle_italic();
        assert!(!state.caret_style.italic);
    }

    #[test]
    fn test_toggle_selection_twice_restores_document() {
        let (mut state, _dir) = state_with_store();
        state.doc.replace_with("подчеркнутый", CharStyle::default());
        let before = state.doc.clone();
        state.selection = Some((2, 8));

        state.toggle_underline();
        assert_ne!(state.doc, before);
        state.toggle_underline();
        assert_eq!(state.doc, before);
    }

    #[test]
    fn test_set_size_clamps_to_spinner_range() {
        let (mut state, _dir) = state_with_store();
        state.set_size(1000.0);
        assert_eq!(state.caret_style.size, 100.0);
    }

    #[test]
    fn test_refresh_caret_style_follows_cursor() {
        let (mut state, _dir) = state_with_store();
        state.doc.replace_with("abcd", CharStyle::default());
        state.doc.apply(0..2, |s| s.bold = true);

        state.refresh_caret_style((1, 1));
        assert!(state.caret_style.bold);
        state.refresh_caret_style((4, 4));
        assert!(!state.caret_style.bold);
    }

    #[test]
    fn test_toast_expires() {
        let (mut state, _dir) = state_with_store();
        state.show_toast("Сохранено", 10.0, 2.0);
        state.update_toast(11.0);
        assert!(state.ui.toast_message.is_some());
        state.update_toast(12.5);
        assert!(state.ui.toast_message.is_none());
    }

    #[test]
    fn test_warning_modal_dismiss() {
        let (mut state, _dir) = state_with_store();
        state.show_warning("что-то не так");
        assert!(state.ui.show_error_modal);
        state.dismiss_error();
        assert!(!state.ui.show_error_modal);
        assert!(state.ui.error_message.is_empty());
    }
}
