//! Formatting toolbar for the editor view
//!
//! A single row of controls: back to the gallery, font family and size,
//! the three formatting toggles, foreground color, and the file/print
//! actions. Rendering only reports what was clicked; the shell applies
//! the action after the frame so the text selection is current.

use crate::document::{CharStyle, FontChoice, MAX_FONT_SIZE, MIN_FONT_SIZE};
use eframe::egui::{self, Color32, Response, RichText, Ui, Vec2};

/// Height of the toolbar row.
const TOOLBAR_HEIGHT: f32 = 34.0;

/// Size of icon buttons.
const ICON_BUTTON_SIZE: Vec2 = Vec2::new(30.0, 26.0);

/// Actions that can be triggered from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction {
    /// Return to the template gallery, discarding the document
    ShowTemplates,
    /// Assign a font family to the selection or caret
    SetFont(FontChoice),
    /// Assign a point size to the selection or caret
    SetSize(f32),
    /// Flip bold on the selection or caret
    ToggleBold,
    /// Flip italic on the selection or caret
    ToggleItalic,
    /// Flip underline on the selection or caret
    ToggleUnderline,
    /// Open the modal color picker
    ChooseColor,
    /// Open a text file, replacing the document
    OpenFile,
    /// Save the document as plain text
    SaveFile,
    /// Open the print dialog
    PrintDocument,
}

/// Toolbar renderer. Stateless apart from the widgets' own egui state.
#[derive(Debug, Default)]
pub struct Toolbar;

impl Toolbar {
    pub fn new() -> Self {
        Self
    }

    /// Render the toolbar and return any triggered action.
    ///
    /// `caret` is the style at the insertion point; the toggle buttons
    /// highlight from it and the font widgets display its values.
    pub fn show(&self, ui: &mut Ui, caret: &CharStyle, is_dark: bool) -> Option<ToolbarAction> {
        let mut action: Option<ToolbarAction> = None;

        let separator_color = if is_dark {
            Color32::from_rgb(70, 70, 70)
        } else {
            Color32::from_rgb(210, 210, 210)
        };

        ui.horizontal(|ui| {
            ui.set_height(TOOLBAR_HEIGHT);
            ui.spacing_mut().item_spacing.x = 4.0;

            // Back to the gallery
            if ui.button("Шаблоны").on_hover_text("К шаблонам").clicked() {
                action = Some(ToolbarAction::ShowTemplates);
            }

            vertical_separator(ui, separator_color, TOOLBAR_HEIGHT - 10.0);

            // Font family
            let mut font = caret.font;
            egui::ComboBox::from_id_source("toolbar_font_family")
                .selected_text(font.display_name())
                .width(80.0)
                .show_ui(ui, |ui| {
                    for choice in FontChoice::ALL {
                        if ui
                            .selectable_value(&mut font, choice, choice.display_name())
                            .clicked()
                            && choice != caret.font
                        {
                            action = Some(ToolbarAction::SetFont(choice));
                        }
                    }
                });

            // Point size, same 1–100 range as the original spinner
            let mut size = caret.size;
            let size_response = ui.add(
                egui::DragValue::new(&mut size)
                    .clamp_range(MIN_FONT_SIZE..=MAX_FONT_SIZE)
                    .speed(1.0)
                    .max_decimals(0),
            );
            if size_response.changed() && size != caret.size {
                action = Some(ToolbarAction::SetSize(size));
            }

            vertical_separator(ui, separator_color, TOOLBAR_HEIGHT - 10.0);

            // Formatting toggles; Ж/К/Ч follows the labeling convention of
            // Russian-language word processors.
            if format_button(ui, "Ж", "Жирный", caret.bold, is_dark, true).clicked() {
                action = Some(ToolbarAction::ToggleBold);
            }
            if format_button(ui, "К", "Курсив", caret.italic, is_dark, false).clicked() {
                action = Some(ToolbarAction::ToggleItalic);
            }
            if format_button(ui, "Ч", "Подчеркнутый", caret.underline, is_dark, false).clicked() {
                action = Some(ToolbarAction::ToggleUnderline);
            }

            if icon_button(ui, "🎨", "Цвет текста", is_dark).clicked() {
                action = Some(ToolbarAction::ChooseColor);
            }

            vertical_separator(ui, separator_color, TOOLBAR_HEIGHT - 10.0);

            if icon_button(ui, "📂", "Открыть", is_dark).clicked() {
                action = Some(ToolbarAction::OpenFile);
            }
            if icon_button(ui, "💾", "Сохранить", is_dark).clicked() {
                action = Some(ToolbarAction::SaveFile);
            }
            if icon_button(ui, "🖨", "Печать", is_dark).clicked() {
                action = Some(ToolbarAction::PrintDocument);
            }
        });

        // Draw bottom border
        let rect = ui.min_rect();
        ui.painter().line_segment(
            [
                egui::pos2(rect.min.x, rect.max.y),
                egui::pos2(rect.max.x, rect.max.y),
            ],
            egui::Stroke::new(1.0, separator_color),
        );

        action
    }
}

/// Render an icon button with consistent styling.
fn icon_button(ui: &mut Ui, icon: &str, tooltip: &str, is_dark: bool) -> Response {
    let text_color = if is_dark {
        Color32::from_rgb(220, 220, 220)
    } else {
        Color32::from_rgb(50, 50, 50)
    };
    let hover_bg = if is_dark {
        Color32::from_rgb(60, 60, 60)
    } else {
        Color32::from_rgb(220, 220, 220)
    };

    let btn = ui.add(
        egui::Button::new(RichText::new(" ").size(15.0))
            .frame(false)
            .min_size(ICON_BUTTON_SIZE),
    );

    if btn.hovered() {
        ui.painter()
            .rect_filled(btn.rect, egui::Rounding::same(3.0), hover_bg);
    }

    ui.painter().text(
        btn.rect.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(15.0),
        text_color,
    );

    btn.on_hover_text(tooltip)
}

/// Render a format toggle button with active-state highlighting.
fn format_button(
    ui: &mut Ui,
    label: &str,
    tooltip: &str,
    active: bool,
    is_dark: bool,
    strong: bool,
) -> Response {
    let text_color = if is_dark {
        Color32::from_rgb(220, 220, 220)
    } else {
        Color32::from_rgb(50, 50, 50)
    };
    let active_bg = if is_dark {
        Color32::from_rgb(70, 90, 120)
    } else {
        Color32::from_rgb(200, 220, 240)
    };
    let hover_bg = if is_dark {
        Color32::from_rgb(60, 60, 60)
    } else {
        Color32::from_rgb(220, 220, 220)
    };

    let mut text = RichText::new(label).size(13.0).color(text_color);
    if strong {
        text = text.strong();
    }

    let btn = ui.add(
        egui::Button::new(text)
            .frame(false)
            .min_size(Vec2::new(24.0, 22.0)),
    );

    if active {
        ui.painter()
            .rect_filled(btn.rect, egui::Rounding::same(3.0), active_bg);
        ui.painter().text(
            btn.rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(13.0),
            text_color,
        );
    } else if btn.hovered() {
        ui.painter()
            .rect_filled(btn.rect, egui::Rounding::same(3.0), hover_bg);
        ui.painter().text(
            btn.rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(13.0),
            text_color,
        );
    }

    btn.on_hover_text(tooltip)
}

/// Draw a vertical separator line.
fn vertical_separator(ui: &mut Ui, color: Color32, height: f32) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::new(1.0, height), egui::Sense::hover());
    ui.painter().line_segment(
        [rect.center_top(), rect.center_bottom()],
        egui::Stroke::new(1.0, color),
    );
}
