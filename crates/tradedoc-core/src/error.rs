//! Error types for the tradedoc-core library.
//!
//! Field extraction itself never fails: a pattern that does not match leaves the field
//! empty. These errors cover the surrounding work (reading documents, configuration,
//! parsing format tags).

use thiserror::Error;

/// Main error type for the tradedoc library.
#[derive(Error, Debug)]
pub enum TradeDocError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A format tag outside the six known document formats.
    #[error("unknown document format: {0}")]
    UnknownFormat(String),

    /// A field name outside the canonical vocabulary.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF yielded no text at all.
    #[error("PDF contains no extractable text")]
    NoText,
}

/// Result type for the tradedoc library.
pub type Result<T> = std::result::Result<T, TradeDocError>;
