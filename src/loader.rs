//! Directory loader for source documents.
//!
//! Recognizes `.txt` and `.pdf` files; anything else is skipped. Entries
//! are sorted by filename so the resulting chunk order is deterministic
//! across platforms.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::document::Document;
use crate::error::{RagbotError, Result};

/// Read all recognized files under `dir` into [`Document`]s.
///
/// A file that fails to read or extract yields a document with empty text
/// (logged, not fatal) so one corrupt file never aborts a whole build.
///
/// # Errors
///
/// Returns [`RagbotError::DocumentRead`] only if the directory itself
/// cannot be read.
pub fn load_documents(dir: &Path) -> Result<Vec<Document>> {
    let entries = fs::read_dir(dir).map_err(|e| RagbotError::DocumentRead {
        source_id: dir.display().to_string(),
        message: format!("cannot read source directory: {e}"),
    })?;

    let mut paths: Vec<PathBuf> =
        entries.filter_map(|entry| entry.ok()).map(|entry| entry.path()).collect();
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        if !path.is_file() {
            continue;
        }
        let Some(source_id) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let source_id = source_id.to_string();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let text = match extension.as_deref() {
            Some("txt") => read_text(&path, &source_id),
            Some("pdf") => read_pdf(&path, &source_id),
            _ => {
                debug!(source_id, "skipping unrecognized file");
                continue;
            }
        };

        documents.push(Document { source_id, text });
    }

    info!(dir = %dir.display(), documents = documents.len(), "loaded source documents");
    Ok(documents)
}

fn read_text(path: &Path, source_id: &str) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(source_id, error = %e, "failed to read text file, treating as empty");
            String::new()
        }
    }
}

fn read_pdf(path: &Path, source_id: &str) -> String {
    match pdf_extract::extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(source_id, error = %e, "failed to extract PDF text, treating as empty");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_txt_files_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "beta").unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();

        let documents = load_documents(dir.path()).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].source_id, "a.txt");
        assert_eq!(documents[0].text, "alpha");
        assert_eq!(documents[1].source_id, "b.txt");
        assert_eq!(documents[1].text, "beta");
    }

    #[test]
    fn skips_unrecognized_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "keep").unwrap();
        fs::write(dir.path().join("image.png"), [0u8, 1, 2]).unwrap();
        fs::write(dir.path().join("noext"), "skip").unwrap();

        let documents = load_documents(dir.path()).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].source_id, "notes.txt");
    }

    #[test]
    fn corrupt_pdf_yields_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.pdf"), b"not a real pdf").unwrap();

        let documents = load_documents(dir.path()).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].source_id, "broken.pdf");
        assert!(documents[0].text.is_empty());
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            load_documents(&missing).unwrap_err(),
            RagbotError::DocumentRead { .. }
        ));
    }

    #[test]
    fn uppercase_extension_is_recognized() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("CAPS.TXT"), "shout").unwrap();

        let documents = load_documents(dir.path()).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].text, "shout");
    }
}
