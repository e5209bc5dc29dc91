//! Local document text extraction.
//!
//! Used when no text-extraction service is configured: PDFs go through `pdf-extract`,
//! anything else is read as UTF-8 with invalid sequences replaced.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{PdfError, Result};

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Whether the bytes (or, failing that, the file name) look like a PDF.
pub fn is_pdf(path: &Path, data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
        || path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Extract the text layer of a PDF held in memory.
pub fn extract_text(data: &[u8]) -> std::result::Result<String, PdfError> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

    if text.trim().is_empty() {
        warn!("PDF has no text layer");
        return Err(PdfError::NoText);
    }

    Ok(text)
}

/// Linearized text of a document already loaded into memory.
pub fn document_text(path: &Path, data: &[u8]) -> Result<String> {
    if is_pdf(path, data) {
        debug!("Extracting PDF text locally from {}", path.display());
        Ok(extract_text(data)?)
    } else {
        debug!("Reading {} as plain text", path.display());
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}

/// Read a document from disk and return its text.
pub fn read_document(path: &Path) -> Result<String> {
    let data = std::fs::read(path)?;
    document_text(path, &data)
}
