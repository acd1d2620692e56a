//! In-memory rich document model
//!
//! The editor surface tracks per-character-run formatting that the plain
//! text widget cannot carry across edits. The model is char-indexed
//! throughout (the stock templates are Cyrillic, so byte offsets are
//! never used for span arithmetic).

mod model;
mod style;

pub use model::{RichDocument, StyleSpan};
pub use style::{CharStyle, FontChoice, MAX_FONT_SIZE, MIN_FONT_SIZE};
