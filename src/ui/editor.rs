//! Rich text editor surface
//!
//! Wraps egui's `TextEdit` with a layouter driven by the document's
//! style runs. The widget edits a frame-local copy of the text; when it
//! reports a change the document reconciles its span table against the
//! new buffer before the frame ends.

use crate::document::{CharStyle, RichDocument};
use eframe::egui::{self, ScrollArea, TextEdit, Ui};
use std::sync::Arc;

/// Result of showing the editor widget.
pub struct EditorOutput {
    /// Current selection as a normalized char range, when focused.
    pub cursor_range: Option<(usize, usize)>,
}

/// Builder-style editor widget over the rich document.
pub struct EditorWidget<'a> {
    doc: &'a mut RichDocument,
    /// Style newly typed chars inherit.
    caret_style: CharStyle,
    /// Theme text color runs without an explicit color resolve to.
    default_color: egui::Color32,
    /// Request keyboard focus this frame (entering the editor view).
    request_focus: bool,
}

impl<'a> EditorWidget<'a> {
    pub fn new(doc: &'a mut RichDocument) -> Self {
        Self {
            doc,
            caret_style: CharStyle::default(),
            default_color: egui::Color32::BLACK,
            request_focus: false,
        }
    }

    #[must_use]
    pub fn caret_style(mut self, style: CharStyle) -> Self {
        self.caret_style = style;
        self
    }

    #[must_use]
    pub fn default_color(mut self, color: egui::Color32) -> Self {
        self.default_color = color;
        self
    }

    #[must_use]
    pub fn request_focus(mut self, focus: bool) -> Self {
        self.request_focus = focus;
        self
    }

    /// Show the editor widget and return the output.
    pub fn show(self, ui: &mut Ui) -> EditorOutput {
        let caret_style = self.caret_style;
        let default_color = self.default_color;
        let mut buffer = self.doc.text().to_owned();

        let doc_view: &RichDocument = self.doc;
        let mut layouter = |ui: &Ui, text: &str, wrap_width: f32| -> Arc<egui::Galley> {
            let job = doc_view.layout_job_for(text, wrap_width, default_color, caret_style);
            ui.fonts(|fonts| fonts.layout_job(job))
        };

        let output = ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                TextEdit::multiline(&mut buffer)
                    .id_source("document_editor")
                    .desired_width(f32::INFINITY)
                    .desired_rows(30)
                    .frame(false)
                    .lock_focus(true)
                    .layouter(&mut layouter)
                    .show(ui)
            })
            .inner;

        if self.request_focus {
            output.response.request_focus();
        }

        let cursor_range = output.cursor_range.map(|range| {
            let a = range.primary.ccursor.index;
            let b = range.secondary.ccursor.index;
            (a.min(b), a.max(b))
        });

        if output.response.changed() {
            self.doc.sync_edit(&buffer, caret_style);
        }

        EditorOutput { cursor_range }
    }
}
