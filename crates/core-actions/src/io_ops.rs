//! File IO for documents.
//!
//! Synchronous and whole-file: load reads every byte up front, save writes the
//! serialized document in one call. A failed load is fatal to the caller; a
//! failed save is reported back as an [`IoError`] so the editor can keep running.

use anyhow::Context;
use core_state::Document;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("{0}")]
    Write(#[from] std::io::Error),
}

/// Read `path` into a clean document that remembers its file name.
pub fn load_document(path: &Path) -> anyhow::Result<Document> {
    let bytes =
        std::fs::read(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut doc = Document::from_bytes(&bytes);
    doc.file_name = Some(path.to_path_buf());
    tracing::info!(target: "io", lines = doc.line_count(), bytes = bytes.len(), "file_loaded");
    Ok(doc)
}

/// Write the document to `path`. Returns the number of bytes written and marks
/// the document clean on success.
pub fn write_document(doc: &mut Document, path: &Path) -> Result<usize, IoError> {
    let bytes = doc.serialize();
    if let Err(e) = std::fs::write(path, &bytes) {
        tracing::error!(target: "io", error = %e, "file_write_error");
        return Err(e.into());
    }
    doc.dirty = 0;
    tracing::info!(target: "io", bytes = bytes.len(), "file_written");
    Ok(bytes.len())
}
