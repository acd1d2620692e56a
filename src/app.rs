//! Main application module for Slovo
//!
//! Implements the eframe App trait: renders the toolbar and the active
//! view, dispatches toolbar actions after the frame (so the text
//! selection captured during rendering is current), and hosts the modal
//! dialogs.

use crate::config::Settings;
use crate::export::print_preview;
use crate::files::dialogs::{open_file_dialog, save_file_dialog};
use crate::state::{AppState, View};
use crate::ui::{
    ColorDialog, DialogOutcome, EditorWidget, Gallery, PrintDialog, Toolbar, ToolbarAction,
};
use eframe::egui;
use log::{debug, info};

/// Title of the rendered print page.
const PRINT_TITLE: &str = "Документ — Slovo";

/// The main application struct that holds all state and implements eframe::App.
pub struct SlovoApp {
    /// Central application state
    state: AppState,
    /// Toolbar component
    toolbar: Toolbar,
    /// Template gallery component
    gallery: Gallery,
    /// Active color picker dialog
    color_dialog: Option<ColorDialog>,
    /// Active print confirmation dialog
    print_dialog: Option<PrintDialog>,
    /// Cursor range of the previous frame, for caret style refresh
    last_cursor: Option<(usize, usize)>,
    /// Application start time for timing toast messages
    start_time: std::time::Instant,
}

impl SlovoApp {
    /// Create a new application instance from loaded settings.
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        info!("Initializing Slovo");

        Self {
            state: AppState::new(settings),
            toolbar: Toolbar::new(),
            gallery: Gallery::new(),
            color_dialog: None,
            print_dialog: None,
            last_cursor: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Get elapsed time since app start in seconds.
    fn get_app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────

    /// Render the main UI; returns the toolbar action to apply afterwards.
    fn render_ui(&mut self, ctx: &egui::Context) -> Option<ToolbarAction> {
        let is_dark = ctx.style().visuals.dark_mode;
        let mut action = None;

        if self.state.view == View::Editor {
            egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
                action = self.toolbar.show(ui, &self.state.caret_style, is_dark);
            });
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(toast) = &self.state.ui.toast_message {
                    ui.label(egui::RichText::new(toast).italics());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.view == View::Editor && !self.state.doc.is_empty() {
                        ui.label(
                            egui::RichText::new(format!(
                                "символов: {}",
                                self.state.doc.char_len()
                            ))
                            .small(),
                        );
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Gallery => {
                if let Some(kind) = self.gallery.show(ui) {
                    debug!("Gallery selection: {:?}", kind);
                    self.state.select_template(kind);
                }
            }
            View::Editor => {
                let default_color = ui.visuals().text_color();
                let needs_focus = std::mem::take(&mut self.state.needs_focus);

                let output = EditorWidget::new(&mut self.state.doc)
                    .caret_style(self.state.caret_style)
                    .default_color(default_color)
                    .request_focus(needs_focus)
                    .show(ui);

                self.state.selection = output.cursor_range;
                // Refresh the caret style only when the cursor actually
                // moved, so a pending toggle survives until typing.
                if output.cursor_range != self.last_cursor {
                    if let Some(cursor) = output.cursor_range {
                        self.state.refresh_caret_style(cursor);
                    }
                    self.last_cursor = output.cursor_range;
                }
            }
        });

        action
    }

    // ─────────────────────────────────────────────────────────────────────
    // Action Handling
    // ─────────────────────────────────────────────────────────────────────

    /// Apply a toolbar action after the frame rendered.
    fn handle_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::ShowTemplates => self.state.show_templates(),
            ToolbarAction::SetFont(font) => self.state.set_font(font),
            ToolbarAction::SetSize(size) => self.state.set_size(size),
            ToolbarAction::ToggleBold => self.state.toggle_bold(),
            ToolbarAction::ToggleItalic => self.state.toggle_italic(),
            ToolbarAction::ToggleUnderline => self.state.toggle_underline(),
            ToolbarAction::ChooseColor => {
                self.color_dialog = Some(ColorDialog::new(
                    self.state
                        .caret_style
                        .resolved_color(egui::Color32::from_rgb(20, 20, 20)),
                ));
            }
            ToolbarAction::OpenFile => self.handle_open_file(),
            ToolbarAction::SaveFile => self.handle_save_file(),
            ToolbarAction::PrintDocument => {
                let lines = self.state.doc.text().lines().count();
                self.print_dialog = Some(PrintDialog::new(self.state.doc.char_len(), lines));
            }
        }
    }

    fn handle_open_file(&mut self) {
        let Some(path) = open_file_dialog(None) else {
            return;
        };
        match self.state.open_document(&path) {
            Ok(()) => {
                let time = self.get_app_time();
                self.state
                    .show_toast(format!("Открыт: {}", path.display()), time, 2.5);
            }
            Err(e) => {
                self.state
                    .show_error(format!("Не удалось открыть файл:\n{}", e));
            }
        }
    }

    fn handle_save_file(&mut self) {
        let Some(path) = save_file_dialog(None, Some("документ.txt")) else {
            return;
        };
        match self.state.save_document(&path) {
            Ok(()) => {
                let time = self.get_app_time();
                self.state
                    .show_toast(format!("Сохранено: {}", path.display()), time, 3.0);
            }
            Err(e) => {
                self.state
                    .show_error(format!("Не удалось сохранить файл:\n{}", e));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Modal Dialogs
    // ─────────────────────────────────────────────────────────────────────

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        // Color picker
        if let Some(dialog) = &mut self.color_dialog {
            match dialog.show(ctx) {
                DialogOutcome::Open => {}
                DialogOutcome::Cancelled => self.color_dialog = None,
                DialogOutcome::Confirmed(color) => {
                    self.state.set_color(color);
                    self.color_dialog = None;
                }
            }
        }

        // Print confirmation
        if let Some(dialog) = &mut self.print_dialog {
            match dialog.show(ctx) {
                DialogOutcome::Open => {}
                DialogOutcome::Cancelled => self.print_dialog = None,
                DialogOutcome::Confirmed(()) => {
                    self.print_dialog = None;
                    match print_preview(&self.state.doc, PRINT_TITLE) {
                        Ok(path) => {
                            let time = self.get_app_time();
                            self.state.show_toast(
                                format!("Передано на печать: {}", path.display()),
                                time,
                                3.0,
                            );
                        }
                        Err(e) => self.state.show_error(format!("{}", e)),
                    }
                }
            }
        }

        // Error/warning modal
        if self.state.ui.show_error_modal {
            let title = if self.state.ui.error_is_warning {
                "Предупреждение"
            } else {
                "Ошибка"
            };
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(egui::RichText::new("⚠").size(24.0));
                    ui.label(&self.state.ui.error_message);
                    ui.separator();
                    if ui.button("OK").clicked() {
                        self.state.dismiss_error();
                    }
                });
        }
    }
}

impl eframe::App for SlovoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update toast message (clear if expired)
        let current_time = self.get_app_time();
        self.state.update_toast(current_time);

        // Render the main UI (this updates the editor selection)
        let action = self.render_ui(ctx);

        // Apply the toolbar action AFTER render so the selection is current
        if let Some(action) = action {
            debug!("Toolbar action: {:?}", action);
            self.handle_action(action);
        }

        self.render_dialogs(ctx);
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // The in-memory document is discarded without prompting.
        info!("Application exiting");
    }
}
