//! Template catalog and on-disk template store
//!
//! The gallery offers nine fixed entries: "Новый документ" plus eight
//! file-backed document skeletons. The catalog is a closed enum so the
//! name→file and name→glyph mappings are exhaustive at compile time
//! rather than string-keyed lookups.

mod content;
mod store;

pub use store::{ensure_templates, read_template, ICONS_DIR, TEMPLATES_DIR};

/// The nine gallery entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Empty document, no backing file
    NewDocument,
    Letter,
    Resume,
    Report,
    Calendar,
    Blank,
    List,
    Note,
    Protocol,
}

impl TemplateKind {
    /// All catalog entries in gallery order, "Новый документ" first.
    pub const ALL: [TemplateKind; 9] = [
        TemplateKind::NewDocument,
        TemplateKind::Letter,
        TemplateKind::Resume,
        TemplateKind::Report,
        TemplateKind::Calendar,
        TemplateKind::Blank,
        TemplateKind::List,
        TemplateKind::Note,
        TemplateKind::Protocol,
    ];

    /// Display name shown on the gallery tile.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::NewDocument => "Новый документ",
            TemplateKind::Letter => "Письмо",
            TemplateKind::Resume => "Резюме",
            TemplateKind::Report => "Отчет",
            TemplateKind::Calendar => "Календарь",
            TemplateKind::Blank => "Бланк",
            TemplateKind::List => "Список",
            TemplateKind::Note => "Заметка",
            TemplateKind::Protocol => "Протокол",
        }
    }

    /// Emoji glyph shown on the gallery tile.
    pub fn glyph(&self) -> &'static str {
        match self {
            TemplateKind::NewDocument => "📄",
            TemplateKind::Letter => "✉",
            TemplateKind::Resume => "👤",
            TemplateKind::Report => "📊",
            TemplateKind::Calendar => "📅",
            TemplateKind::Blank => "📋",
            TemplateKind::List => "📝",
            TemplateKind::Note => "📌",
            TemplateKind::Protocol => "📑",
        }
    }

    /// Backing file name under the templates directory.
    ///
    /// `None` for `NewDocument`, which maps to an empty editor.
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            TemplateKind::NewDocument => None,
            TemplateKind::Letter => Some("letter.txt"),
            TemplateKind::Resume => Some("resume.txt"),
            TemplateKind::Report => Some("report.txt"),
            TemplateKind::Calendar => Some("calendar.txt"),
            TemplateKind::Blank => Some("blank.txt"),
            TemplateKind::List => Some("list.txt"),
            TemplateKind::Note => Some("note.txt"),
            TemplateKind::Protocol => Some("protocol.txt"),
        }
    }

    /// The fixed literal skeleton this template materializes to disk.
    pub fn content(&self) -> Option<&'static str> {
        match self {
            TemplateKind::NewDocument => None,
            TemplateKind::Letter => Some(content::LETTER),
            TemplateKind::Resume => Some(content::RESUME),
            TemplateKind::Report => Some(content::REPORT),
            TemplateKind::Calendar => Some(content::CALENDAR),
            TemplateKind::Blank => Some(content::BLANK),
            TemplateKind::List => Some(content::LIST),
            TemplateKind::Note => Some(content::NOTE),
            TemplateKind::Protocol => Some(content::PROTOCOL),
        }
    }
}
