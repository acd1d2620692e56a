//! HTML rendering of the formatted document
//!
//! Turns the document's style runs into a standalone HTML file: escaped
//! text, `<b>`/`<i>`/`<u>` marks and inline font/color styles, with
//! whitespace preserved so the printed page matches the editor layout.

use crate::document::{CharStyle, FontChoice, RichDocument};
use crate::error::{Error, Result};
use egui::Color32;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Base CSS for the printable page.
const BASE_CSS: &str = "\
body {
    margin: 2em auto;
    max-width: 48em;
    color: #111;
    background: #fff;
}
.document {
    white-space: pre-wrap;
    word-wrap: break-word;
}";

/// Render the document as a complete standalone HTML page.
pub fn render_html(document: &RichDocument, title: &str) -> String {
    let mut body = String::new();

    let text = document.text();
    let mut byte = 0;
    for span in document.spans() {
        let end = text[byte..]
            .char_indices()
            .nth(span.len)
            .map(|(i, _)| byte + i)
            .unwrap_or(text.len());
        push_run(&mut body, &text[byte..end], &span.style);
        byte = end;
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="UTF-8">
<meta name="generator" content="Slovo">
<title>{title}</title>
<style>
{css}
</style>
</head>
<body>
<div class="document">{body}</div>
</body>
</html>"#,
        title = html_escape(title),
        css = BASE_CSS,
        body = body,
    )
}

/// Render the document and hand the file to the OS default handler.
///
/// The file lands in the system temp directory; the user prints from the
/// viewer that opens. Returns the written path.
pub fn print_preview(document: &RichDocument, title: &str) -> Result<PathBuf> {
    let html = render_html(document, title);
    let path = std::env::temp_dir().join("slovo-print.html");

    fs::write(&path, html).map_err(|source| Error::FileWrite {
        path: path.clone(),
        source,
    })?;

    open::that(&path).map_err(|e| Error::Export {
        message: format!("could not open '{}': {}", path.display(), e),
    })?;

    info!("Print preview handed off: {}", path.display());
    Ok(path)
}

/// Append one styled run to the HTML body.
fn push_run(out: &mut String, text: &str, style: &CharStyle) {
    if text.is_empty() {
        return;
    }

    let mut styles = vec![format!("font-size:{}pt", style.size)];
    styles.push(match style.font {
        FontChoice::Sans => "font-family:sans-serif".to_string(),
        FontChoice::Mono => "font-family:monospace".to_string(),
    });
    if style.color != Color32::PLACEHOLDER {
        styles.push(format!(
            "color:#{:02x}{:02x}{:02x}",
            style.color.r(),
            style.color.g(),
            style.color.b()
        ));
    }

    out.push_str(&format!("<span style=\"{}\">", styles.join(";")));
    if style.bold {
        out.push_str("<b>");
    }
    if style.italic {
        out.push_str("<i>");
    }
    if style.underline {
        out.push_str("<u>");
    }

    out.push_str(&html_escape(text));

    if style.underline {
        out.push_str("</u>");
    }
    if style.italic {
        out.push_str("</i>");
    }
    if style.bold {
        out.push_str("</b>");
    }
    out.push_str("</span>");
}

/// Escape HTML special characters.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled_doc() -> RichDocument {
        let mut d = RichDocument::new();
        d.replace_with("жирный и цветной", CharStyle::default());
        d.apply(0..6, |s| s.bold = true);
        d.apply(9..16, |s| s.color = Color32::from_rgb(0xaa, 0x00, 0x10));
        d
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(html_escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_render_emits_bold_and_color() {
        let html = render_html(&styled_doc(), "Документ");
        assert!(html.contains("<b>жирный</b>"));
        assert!(html.contains("color:#aa0010"));
        assert!(html.contains("<title>Документ</title>"));
    }

    #[test]
    fn test_render_preserves_whitespace_layout() {
        let html = render_html(&styled_doc(), "t");
        assert!(html.contains("white-space: pre-wrap"));
    }

    #[test]
    fn test_render_escapes_document_text() {
        let mut d = RichDocument::new();
        d.replace_with("<script>alert(1)</script>", CharStyle::default());
        let html = render_html(&d, "t");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_marks_italic_underline() {
        let mut d = RichDocument::new();
        d.replace_with("текст", CharStyle::default());
        d.apply(0..5, |s| {
            s.italic = true;
            s.underline = true;
        });
        let html = render_html(&d, "t");
        assert!(html.contains("<i><u>текст</u></i>"));
    }

    #[test]
    fn test_render_empty_document() {
        let html = render_html(&RichDocument::new(), "пусто");
        assert!(html.contains("<div class=\"document\"></div>"));
    }
}
