//! Field extraction from linearized document text.
//!
//! Each document format has its own extractor: an ordered list of independent pattern
//! attempts against the whole text. Extractors write into a [`RawRecord`], and the
//! router runs the coercion pass to produce the public [`FieldRecord`].

pub mod formats;
mod raw;
pub mod rules;

pub use formats::{
    CertificateOfAnalysisExtractor, OrderConfirmationExtractor, PackingListAltExtractor,
    PackingListShippingExtractor, ProformaInvoiceExtractor, PurchaseOrderExtractor,
};
pub use raw::{RawRecord, RawValue};

use tracing::{debug, info, warn};

use crate::models::field::Field;
use crate::models::format::FormatTag;
use crate::models::record::FieldRecord;

/// Trait for per-format document extractors.
pub trait DocumentExtractor {
    /// The format this extractor understands.
    fn format(&self) -> FormatTag;

    /// Fields this extractor looks for. Every returned record carries exactly these keys.
    fn fields(&self) -> &'static [Field];

    /// Run the pattern chains without the final coercion pass.
    fn extract_raw(&self, text: &str) -> RawRecord;

    /// Run the pattern chains and coerce the result.
    fn extract(&self, text: &str) -> FieldRecord {
        self.extract_raw(text).coerce()
    }
}

/// The extractor registered for a format.
pub fn extractor_for(format: FormatTag) -> &'static dyn DocumentExtractor {
    match format {
        FormatTag::PurchaseOrder => &PurchaseOrderExtractor,
        FormatTag::PackingListShipping => &PackingListShippingExtractor,
        FormatTag::OrderConfirmation => &OrderConfirmationExtractor,
        FormatTag::ProformaInvoice => &ProformaInvoiceExtractor,
        FormatTag::CertificateOfAnalysis => &CertificateOfAnalysisExtractor,
        FormatTag::PackingListAlt => &PackingListAltExtractor,
    }
}

/// Extract the fields of one document.
///
/// Total over all inputs: a pattern that finds nothing leaves its field empty, it never
/// aborts the rest of the extraction.
pub fn extract(text: &str, format: FormatTag) -> FieldRecord {
    info!(
        "Extracting {} fields from {} characters of text",
        format.document_name(),
        text.len()
    );

    let record = extractor_for(format).extract(text);

    debug!(
        "{}: {} of {} fields populated",
        format,
        record.present().count(),
        record.len()
    );

    record
}

/// Extract using a textual format tag. Unknown tags yield an empty record.
pub fn extract_tagged(text: &str, tag: &str) -> FieldRecord {
    match tag.parse::<FormatTag>() {
        Ok(format) => extract(text, format),
        Err(e) => {
            warn!("{}, returning empty record", e);
            FieldRecord::new()
        }
    }
}
