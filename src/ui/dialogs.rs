//! Modal dialogs: color picker and print confirmation
//!
//! Both render as centered modal windows and report a tri-state result;
//! Escape cancels.

use eframe::egui::{self, Color32, Key, RichText};

/// Result from showing a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogOutcome<T> {
    /// No action taken (dialog still open)
    Open,
    /// Dialog was dismissed without effect
    Cancelled,
    /// Dialog was confirmed with a value
    Confirmed(T),
}

// ─────────────────────────────────────────────────────────────────────────────
// Color Picker Dialog
// ─────────────────────────────────────────────────────────────────────────────

/// Modal foreground-color picker.
pub struct ColorDialog {
    choice: Color32,
}

impl ColorDialog {
    /// Open the dialog preloaded with the caret's current color.
    pub fn new(initial: Color32) -> Self {
        Self { choice: initial }
    }

    /// Show the dialog; `Confirmed` carries the chosen color.
    pub fn show(&mut self, ctx: &egui::Context) -> DialogOutcome<Color32> {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            return DialogOutcome::Cancelled;
        }

        let mut result = DialogOutcome::Open;

        egui::Window::new("🎨 Цвет текста")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(8.0);
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut self.choice,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("OK").clicked() {
                            result = DialogOutcome::Confirmed(self.choice);
                        }
                        ui.add_space(8.0);
                        if ui.button("Отмена").clicked() {
                            result = DialogOutcome::Cancelled;
                        }
                    });
                });
                ui.add_space(4.0);
            });

        result
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Print Dialog
// ─────────────────────────────────────────────────────────────────────────────

/// Modal print confirmation.
///
/// Confirming hands the rendered document to the system viewer, which
/// owns printer selection; this dialog only confirms intent and shows
/// what will be sent.
pub struct PrintDialog {
    char_count: usize,
    line_count: usize,
}

impl PrintDialog {
    pub fn new(char_count: usize, line_count: usize) -> Self {
        Self {
            char_count,
            line_count,
        }
    }

    /// Show the dialog; `Confirmed(())` starts the print hand-off.
    pub fn show(&mut self, ctx: &egui::Context) -> DialogOutcome<()> {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            return DialogOutcome::Cancelled;
        }

        let mut result = DialogOutcome::Open;

        egui::Window::new("🖨 Печать")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.add_space(8.0);

                ui.label("Документ будет открыт в системном просмотрщике для печати.");
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!(
                        "Строк: {}, символов: {}",
                        self.line_count, self.char_count
                    ))
                    .small(),
                );
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Печать").clicked() {
                            result = DialogOutcome::Confirmed(());
                        }
                        ui.add_space(8.0);
                        if ui.button("Отмена").clicked() {
                            result = DialogOutcome::Cancelled;
                        }
                    });
                });
                ui.add_space(4.0);
            });

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_dialog_keeps_initial_choice() {
        let dialog = ColorDialog::new(Color32::RED);
        assert_eq!(dialog.choice, Color32::RED);
    }

    #[test]
    fn test_print_dialog_counts() {
        let dialog = PrintDialog::new(120, 7);
        assert_eq!(dialog.char_count, 120);
        assert_eq!(dialog.line_count, 7);
    }

    #[test]
    fn test_outcome_equality() {
        assert_eq!(DialogOutcome::Confirmed(()), DialogOutcome::Confirmed(()));
        assert_ne!(
            DialogOutcome::<Color32>::Open,
            DialogOutcome::<Color32>::Cancelled
        );
    }
}
