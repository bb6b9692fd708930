//! Filesystem delivery for export artifacts.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, WordDocument, print_page};

/// Write the export document to disk.
///
/// A directory target uses the document's derived filename; a file target is
/// written as given. Returns the path written.
pub fn save_document(document: &WordDocument, target: &Path) -> Result<PathBuf, AppError> {
    let path =
        if target.is_dir() { target.join(&document.filename) } else { target.to_path_buf() };
    fs::write(&path, document.as_bytes())?;
    Ok(path)
}

/// Render the print page for the memo into a kept temp file.
///
/// The temp handle is released immediately; only the path survives, for the
/// system opener to consume.
pub fn write_print_page(memo_text: &str) -> Result<PathBuf, AppError> {
    let mut file =
        tempfile::Builder::new().prefix("sarabun-print-").suffix(".html").tempfile()?;
    file.write_all(print_page(memo_text).as_bytes())?;
    let (_, path) = file.keep().map_err(|e| AppError::Io(e.error))?;
    Ok(path)
}

/// Open the memo's print preview with the platform handler.
///
/// The opened page invokes the print action itself; printing failures past
/// the handoff are the platform's concern.
pub fn open_print_preview(memo_text: &str) -> Result<PathBuf, AppError> {
    let path = write_print_page(memo_text)?;
    open::that_detached(&path)?;
    Ok(path)
}
