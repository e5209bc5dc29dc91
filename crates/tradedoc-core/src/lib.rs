//! Core library for export trade-document processing.
//!
//! This crate provides:
//! - The canonical field vocabulary and document format tags
//! - Per-format field extraction from linearized document text
//! - Numeric and free-text normalization helpers
//! - Cross-document comparison of extracted records
//! - Local PDF text extraction (feature `pdf`)

pub mod compare;
pub mod error;
pub mod extract;
pub mod models;
#[cfg(feature = "pdf")]
pub mod pdf;

pub use compare::{
    compare, CellStatus, Comparison, ComparisonCell, ComparisonRow, ComparisonSection,
};
pub use error::{PdfError, Result, TradeDocError};
pub use extract::{extract, extract_tagged, extractor_for, DocumentExtractor, RawRecord, RawValue};
pub use models::config::TradeDocConfig;
pub use models::field::{Field, FieldCategory};
pub use models::format::FormatTag;
pub use models::record::FieldRecord;
