//! Certificate of analysis (format E).

use lazy_static::lazy_static;
use regex::Regex;

use crate::extract::raw::RawRecord;
use crate::extract::rules::OrderReference;
use crate::extract::DocumentExtractor;
use crate::models::field::Field;
use crate::models::format::FormatTag;

lazy_static! {
    // "Customer Reference SO-2310045-PO 4500789"
    static ref CUSTOMER_REFERENCE: Regex =
        Regex::new(r"Customer Reference\s+(\S+)-?\s*PO\s*(\d+)").unwrap();

    static ref MATERIAL_NUMBER: Regex = Regex::new(r"Material number\s*=\s*(\d+)").unwrap();
    static ref SPECIFICATION: Regex = Regex::new(r"Specification number\s*=\s*(\d+)").unwrap();
    static ref QUANTITY: Regex = Regex::new(r"(?i)Quantity\s*([\d,]+\.\d+)\s*KG").unwrap();
}

const FIELDS: [Field; 5] = [
    Field::OrderNumber,
    Field::PurchaseOrderNumber,
    Field::MaterialNumber,
    Field::SpecificationNumber,
    Field::NetWeight,
];

/// Extractor for certificates of analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateOfAnalysisExtractor;

impl DocumentExtractor for CertificateOfAnalysisExtractor {
    fn format(&self) -> FormatTag {
        FormatTag::CertificateOfAnalysis
    }

    fn fields(&self) -> &'static [Field] {
        &FIELDS
    }

    fn extract_raw(&self, text: &str) -> RawRecord {
        let mut record = RawRecord::new(&FIELDS);

        let reference = CUSTOMER_REFERENCE
            .captures(text)
            .and_then(|caps| OrderReference::from_captures(&caps));
        OrderReference::write(reference, &mut record);

        record.capture(Field::MaterialNumber, &MATERIAL_NUMBER, text);
        record.capture(Field::SpecificationNumber, &SPECIFICATION, text);
        record.capture_numeric(Field::NetWeight, &QUANTITY, text);

        record
    }
}
