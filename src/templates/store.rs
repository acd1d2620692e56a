//! On-disk template materialization and reads
//!
//! On startup the store guarantees `templates/` and `icons/` exist under
//! the working directory and writes any template file that is missing.
//! Existing files are never overwritten, so user edits to materialized
//! templates survive restarts.

use crate::error::{Error, Result};
use crate::templates::TemplateKind;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the materialized template files.
pub const TEMPLATES_DIR: &str = "templates";

/// Directory reserved for custom icon assets (PNG tiles, window icon).
pub const ICONS_DIR: &str = "icons";

/// Resolve the path of a template's backing file under `base_dir`.
fn template_path(base_dir: &Path, kind: TemplateKind) -> Option<PathBuf> {
    kind.file_name()
        .map(|name| base_dir.join(TEMPLATES_DIR).join(name))
}

/// Materialize the template and icon directories under `base_dir`.
///
/// Creates `templates/` and `icons/` if absent, then writes each missing
/// template file. Files that already exist are left untouched. A failure
/// to write one template is logged and does not abort the rest; template
/// loss is not fatal to using the editor.
///
/// Returns the number of template files newly written.
pub fn ensure_templates(base_dir: &Path) -> Result<usize> {
    let templates_dir = base_dir.join(TEMPLATES_DIR);
    let icons_dir = base_dir.join(ICONS_DIR);

    fs::create_dir_all(&templates_dir)?;
    fs::create_dir_all(&icons_dir)?;

    debug!("Template directory: {}", templates_dir.display());

    let mut written = 0;
    for kind in TemplateKind::ALL {
        let (Some(name), Some(content)) = (kind.file_name(), kind.content()) else {
            continue;
        };
        let path = templates_dir.join(name);
        if path.exists() {
            continue;
        }
        match fs::write(&path, content) {
            Ok(()) => {
                debug!("Materialized template: {}", path.display());
                written += 1;
            }
            Err(e) => {
                warn!("Failed to write template '{}': {}", path.display(), e);
            }
        }
    }

    if written > 0 {
        info!("Materialized {} template file(s)", written);
    }

    Ok(written)
}

/// Read a template's backing file as UTF-8.
///
/// Returns `Error::TemplateNotFound` when the file is absent (the user may
/// have deleted it) and `Error::TemplateRead` on any other I/O failure.
/// `NewDocument` has no backing file and always reports not-found.
pub fn read_template(base_dir: &Path, kind: TemplateKind) -> Result<String> {
    let Some(path) = template_path(base_dir, kind) else {
        return Err(Error::TemplateNotFound {
            name: kind.label().to_string(),
        });
    };

    if !path.exists() {
        return Err(Error::TemplateNotFound {
            name: kind.label().to_string(),
        });
    }

    fs::read_to_string(&path).map_err(|source| Error::TemplateRead { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_creates_directories_and_files() {
        let dir = TempDir::new().unwrap();
        let written = ensure_templates(dir.path()).unwrap();

        assert_eq!(written, 8);
        assert!(dir.path().join(TEMPLATES_DIR).is_dir());
        assert!(dir.path().join(ICONS_DIR).is_dir());
        for kind in TemplateKind::ALL.iter().skip(1) {
            let path = dir
                .path()
                .join(TEMPLATES_DIR)
                .join(kind.file_name().unwrap());
            assert!(path.is_file(), "{:?} not materialized", kind);
        }
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ensure_templates(dir.path()).unwrap(), 8);
        assert_eq!(ensure_templates(dir.path()).unwrap(), 0);
    }

    // The store writes each template once and never overwrites: user
    // edits to a materialized template must survive restarts.
    #[test]
    fn ensure_preserves_edited_template() {
        let dir = TempDir::new().unwrap();
        ensure_templates(dir.path()).unwrap();

        let letter = dir.path().join(TEMPLATES_DIR).join("letter.txt");
        fs::write(&letter, "мой собственный текст").unwrap();

        ensure_templates(dir.path()).unwrap();
        let content = fs::read_to_string(&letter).unwrap();
        assert_eq!(content, "мой собственный текст");
    }

    #[test]
    fn test_read_template_round_trips_literal() {
        let dir = TempDir::new().unwrap();
        ensure_templates(dir.path()).unwrap();

        for kind in TemplateKind::ALL.iter().skip(1) {
            let text = read_template(dir.path(), *kind).unwrap();
            assert_eq!(text, kind.content().unwrap());
            // Materialized content carries no leading/trailing whitespace.
            assert_eq!(text, text.trim());
        }
    }

    #[test]
    fn test_read_missing_template_is_not_found() {
        let dir = TempDir::new().unwrap();
        // No ensure_templates: nothing materialized.
        let err = read_template(dir.path(), TemplateKind::Resume).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { ref name } if name == "Резюме"));
        assert!(err.is_warning());
    }

    #[test]
    fn test_read_new_document_is_not_found() {
        let dir = TempDir::new().unwrap();
        ensure_templates(dir.path()).unwrap();
        let err = read_template(dir.path(), TemplateKind::NewDocument).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }

    #[test]
    fn test_ensure_reports_directory_failure() {
        let dir = TempDir::new().unwrap();
        // Occupy the templates path with a file so create_dir_all fails.
        fs::write(dir.path().join(TEMPLATES_DIR), "not a directory").unwrap();
        assert!(ensure_templates(dir.path()).is_err());
    }
}
