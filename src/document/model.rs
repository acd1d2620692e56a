//! Styled span table over the document text
//!
//! `RichDocument` pairs the text buffer with a run-length table of
//! `CharStyle`s. The table is reconciled after every widget edit by
//! diffing the old and new text, so formatting stays attached to the
//! characters it was applied to under typing, deletion and paste.

use crate::document::style::CharStyle;
use egui::text::LayoutJob;
use egui::Color32;
use std::ops::Range;

/// One formatting run, measured in chars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSpan {
    pub len: usize,
    pub style: CharStyle,
}

/// The in-memory document: text plus its per-run formatting.
///
/// Invariant: the span lengths sum to the char count of the text, spans
/// are non-empty, and adjacent spans never carry equal styles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichDocument {
    text: String,
    spans: Vec<StyleSpan>,
}

impl RichDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The formatting runs.
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Length of the document in chars.
    pub fn char_len(&self) -> usize {
        self.spans.iter().map(|s| s.len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text with all formatting discarded. This is the only save
    /// format: a save→open cycle round-trips text, never formatting.
    pub fn plain_text(&self) -> String {
        self.text.clone()
    }

    /// Replace the whole document (template selection, file open).
    pub fn replace_with(&mut self, text: impl Into<String>, style: CharStyle) {
        self.text = text.into();
        let len = self.text.chars().count();
        self.spans = if len == 0 {
            Vec::new()
        } else {
            vec![StyleSpan { len, style }]
        };
    }

    /// Empty the document ("Новый документ").
    pub fn clear(&mut self) {
        self.text.clear();
        self.spans.clear();
    }

    /// Style governing the insertion point at `char_idx`: the style of the
    /// char before the caret, or of the first char when the caret sits at
    /// the start. `None` on an empty document.
    pub fn style_at(&self, char_idx: usize) -> Option<CharStyle> {
        if self.spans.is_empty() {
            return None;
        }
        let lookup = char_idx.saturating_sub(1);
        let mut acc = 0;
        for span in &self.spans {
            if lookup < acc + span.len {
                return Some(span.style);
            }
            acc += span.len;
        }
        self.spans.last().map(|s| s.style)
    }

    /// Mutate the style of every run covered by `range` (char indices).
    ///
    /// Runs are split at the range boundaries first, so formatting applies
    /// to exactly the selected chars. An empty range is a no-op.
    pub fn apply(&mut self, range: Range<usize>, mut f: impl FnMut(&mut CharStyle)) {
        let len = self.char_len();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return;
        }

        let first = self.split_at(start);
        let last = self.split_at(end);
        for span in &mut self.spans[first..last] {
            f(&mut span.style);
        }
        self.coalesce();
        debug_assert_eq!(self.char_len(), self.text.chars().count());
    }

    /// Reconcile the span table after the text widget mutated the buffer.
    ///
    /// Computes the common char prefix and suffix between the current and
    /// new text, drops the removed chars from the table and inserts the
    /// added chars with `insert_style` (the caret style at typing time).
    pub fn sync_edit(&mut self, new_text: &str, insert_style: CharStyle) {
        if new_text == self.text {
            return;
        }

        let old: Vec<char> = self.text.chars().collect();
        let new: Vec<char> = new_text.chars().collect();

        let mut prefix = 0;
        while prefix < old.len() && prefix < new.len() && old[prefix] == new[prefix] {
            prefix += 1;
        }
        let mut suffix = 0;
        while suffix < old.len() - prefix
            && suffix < new.len() - prefix
            && old[old.len() - 1 - suffix] == new[new.len() - 1 - suffix]
        {
            suffix += 1;
        }

        let removed = old.len() - prefix - suffix;
        let inserted = new.len() - prefix - suffix;

        if removed > 0 {
            self.remove_chars(prefix, removed);
        }
        if inserted > 0 {
            self.insert_chars(prefix, inserted, insert_style);
        }

        self.text = new_text.to_owned();
        self.coalesce();
        debug_assert_eq!(self.char_len(), self.text.chars().count());
    }

    /// Build the layout job rendering `visible_text` with this table.
    ///
    /// `visible_text` may briefly disagree with the model mid-frame (the
    /// widget lays out its edit before the shell reconciles), so runs are
    /// clipped to the text and any uncovered tail renders in `tail_style`.
    pub fn layout_job_for(
        &self,
        visible_text: &str,
        wrap_width: f32,
        default_color: Color32,
        tail_style: CharStyle,
    ) -> LayoutJob {
        let mut job = LayoutJob {
            break_on_newline: true,
            ..Default::default()
        };
        job.wrap.max_width = wrap_width;

        // Char-index → byte-offset table for slicing multi-byte text.
        let bounds: Vec<usize> = visible_text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(visible_text.len()))
            .collect();
        let char_count = bounds.len() - 1;

        let mut cursor = 0;
        for span in &self.spans {
            if cursor >= char_count {
                break;
            }
            let end = (cursor + span.len).min(char_count);
            job.append(
                &visible_text[bounds[cursor]..bounds[end]],
                0.0,
                span.style.text_format(default_color),
            );
            cursor = end;
        }
        if cursor < char_count {
            job.append(
                &visible_text[bounds[cursor]..],
                0.0,
                tail_style.text_format(default_color),
            );
        }

        job
    }

    // ─────────────────────────────────────────────────────────────────────
    // Span table internals
    // ─────────────────────────────────────────────────────────────────────

    /// Ensure a run boundary exists at `char_idx`; returns the index of
    /// the span starting there.
    fn split_at(&mut self, char_idx: usize) -> usize {
        let mut acc = 0;
        for i in 0..self.spans.len() {
            if acc == char_idx {
                return i;
            }
            let len = self.spans[i].len;
            if acc + len > char_idx {
                let head = char_idx - acc;
                let style = self.spans[i].style;
                self.spans[i].len = head;
                self.spans.insert(
                    i + 1,
                    StyleSpan {
                        len: len - head,
                        style,
                    },
                );
                return i + 1;
            }
            acc += len;
        }
        self.spans.len()
    }

    fn remove_chars(&mut self, start: usize, count: usize) {
        let first = self.split_at(start);
        let last = self.split_at(start + count);
        self.spans.drain(first..last);
    }

    fn insert_chars(&mut self, at: usize, count: usize, style: CharStyle) {
        let idx = self.split_at(at);
        self.spans.insert(idx, StyleSpan { len: count, style });
    }

    /// Drop empty runs and merge adjacent runs with equal styles.
    fn coalesce(&mut self) {
        self.spans.retain(|s| s.len > 0);
        let mut i = 0;
        while i + 1 < self.spans.len() {
            if self.spans[i].style == self.spans[i + 1].style {
                self.spans[i].len += self.spans[i + 1].len;
                self.spans.remove(i + 1);
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::style::FontChoice;

    fn doc(text: &str) -> RichDocument {
        let mut d = RichDocument::new();
        d.replace_with(text, CharStyle::default());
        d
    }

    #[test]
    fn test_replace_with_single_run() {
        let d = doc("привет мир");
        assert_eq!(d.text(), "привет мир");
        assert_eq!(d.spans().len(), 1);
        assert_eq!(d.char_len(), 10);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut d = doc("текст");
        d.clear();
        assert!(d.is_empty());
        assert!(d.spans().is_empty());
        assert_eq!(d.char_len(), 0);
    }

    #[test]
    fn test_apply_splits_spans_at_boundaries() {
        let mut d = doc("abcdef");
        d.apply(2..4, |s| s.bold = true);

        assert_eq!(d.spans().len(), 3);
        assert_eq!(d.spans()[0].len, 2);
        assert!(!d.spans()[0].style.bold);
        assert_eq!(d.spans()[1].len, 2);
        assert!(d.spans()[1].style.bold);
        assert_eq!(d.spans()[2].len, 2);
        assert!(!d.spans()[2].style.bold);
    }

    #[test]
    fn test_toggle_bold_twice_restores_original_state() {
        let original = doc("выделенный текст");
        let mut d = original.clone();
        d.apply(3..9, |s| s.bold = !s.bold);
        assert_ne!(d, original);
        d.apply(3..9, |s| s.bold = !s.bold);
        // Coalescing folds the split runs back into one; the document is
        // indistinguishable from the untouched original.
        assert_eq!(d, original);
    }

    #[test]
    fn test_toggle_italic_twice_restores_original_state() {
        let original = doc("выделенный текст");
        let mut d = original.clone();
        d.apply(3..9, |s| s.italic = !s.italic);
        d.apply(3..9, |s| s.italic = !s.italic);
        assert_eq!(d, original);
    }

    #[test]
    fn test_toggle_underline_twice_restores_original_state() {
        let original = doc("выделенный текст");
        let mut d = original.clone();
        d.apply(3..9, |s| s.underline = !s.underline);
        d.apply(3..9, |s| s.underline = !s.underline);
        assert_eq!(d, original);
    }

    #[test]
    fn test_apply_empty_range_is_noop() {
        let mut d = doc("abc");
        let before = d.clone();
        d.apply(1..1, |s| s.bold = true);
        assert_eq!(d, before);
    }

    #[test]
    fn test_apply_clamps_out_of_range() {
        let mut d = doc("abc");
        d.apply(1..999, |s| s.italic = true);
        assert_eq!(d.spans().len(), 2);
        assert!(d.spans()[1].style.italic);
        assert_eq!(d.char_len(), 3);
    }

    #[test]
    fn test_style_at_prefers_char_before_caret() {
        let mut d = doc("abcd");
        d.apply(0..2, |s| s.bold = true);

        // Caret at 0 → style of the first char.
        assert!(d.style_at(0).unwrap().bold);
        // Caret at 2 sits after the bold run.
        assert!(d.style_at(2).unwrap().bold);
        // Caret at 3 follows a plain char.
        assert!(!d.style_at(3).unwrap().bold);
        // Past-the-end falls back to the last run.
        assert!(!d.style_at(99).unwrap().bold);
    }

    #[test]
    fn test_style_at_empty_document() {
        assert!(RichDocument::new().style_at(0).is_none());
    }

    #[test]
    fn test_sync_edit_insertion_keeps_surrounding_runs() {
        let mut d = doc("аабб");
        d.apply(2..4, |s| s.bold = true);

        let mut caret = CharStyle::default();
        caret.italic = true;
        d.sync_edit("ааXYбб", caret);

        assert_eq!(d.text(), "ааXYбб");
        assert_eq!(d.char_len(), 6);
        assert_eq!(d.spans().len(), 3);
        assert!(d.spans()[1].style.italic);
        assert_eq!(d.spans()[1].len, 2);
        assert!(d.spans()[2].style.bold);
    }

    #[test]
    fn test_sync_edit_deletion_across_runs() {
        let mut d = doc("abcdef");
        d.apply(0..3, |s| s.bold = true);

        // Delete "cd": one bold char and one plain char.
        d.sync_edit("abef", CharStyle::default());

        assert_eq!(d.text(), "abef");
        assert_eq!(d.char_len(), 4);
        assert_eq!(d.spans().len(), 2);
        assert_eq!(d.spans()[0].len, 2);
        assert!(d.spans()[0].style.bold);
        assert!(!d.spans()[1].style.bold);
    }

    #[test]
    fn test_sync_edit_replacement() {
        let mut d = doc("один два три");
        d.sync_edit("один ДВАЖДЫ три", CharStyle::default());
        assert_eq!(d.text(), "один ДВАЖДЫ три");
        assert_eq!(d.char_len(), 15);
    }

    #[test]
    fn test_sync_edit_same_text_is_noop() {
        let mut d = doc("abc");
        let before = d.clone();
        d.sync_edit("abc", CharStyle::default());
        assert_eq!(d, before);
    }

    #[test]
    fn test_sync_edit_from_empty() {
        let mut d = RichDocument::new();
        let mut caret = CharStyle::default();
        caret.font = FontChoice::Mono;
        d.sync_edit("м", caret);
        assert_eq!(d.spans().len(), 1);
        assert_eq!(d.spans()[0].style.font, FontChoice::Mono);
    }

    #[test]
    fn test_formatting_never_survives_plain_round_trip() {
        let mut d = doc("жирный текст");
        d.apply(0..6, |s| {
            s.bold = true;
            s.color = Color32::RED;
        });

        // Save writes plain text; re-opening builds a fresh uniform run.
        let saved = d.plain_text();
        let mut reopened = RichDocument::new();
        reopened.replace_with(saved, CharStyle::default());

        assert_eq!(reopened.text(), d.text());
        assert_eq!(reopened.spans().len(), 1);
        assert!(!reopened.spans()[0].style.bold);
        assert_eq!(reopened.spans()[0].style.color, Color32::PLACEHOLDER);
    }

    #[test]
    fn test_layout_job_covers_all_text() {
        let mut d = doc("абвгд");
        d.apply(1..3, |s| s.underline = true);

        let job = d.layout_job_for(d.text(), 400.0, Color32::BLACK, CharStyle::default());
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.text, "абвгд");
    }

    #[test]
    fn test_layout_job_tail_style_for_unsynced_text() {
        let d = doc("ab");
        let mut tail = CharStyle::default();
        tail.italic = true;

        // The widget appended a char the table has not seen yet.
        let job = d.layout_job_for("abc", 400.0, Color32::BLACK, tail);
        assert_eq!(job.sections.len(), 2);
        assert!(job.sections[1].format.italics);
    }

    #[test]
    fn test_layout_job_clips_spans_to_shorter_text() {
        let d = doc("abcdef");
        let job = d.layout_job_for("abc", 400.0, Color32::BLACK, CharStyle::default());
        assert_eq!(job.text, "abc");
    }
}
