//! Stand-alone packing list (format F).
//!
//! Carries the consignee block and shipping terms; the net weight is read from the
//! package total or, failing that, from the first "Sales number:" line.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extract::raw::RawRecord;
use crate::extract::rules::patterns::INCOTERMS_LINE;
use crate::extract::rules::OrderReference;
use crate::extract::DocumentExtractor;
use crate::models::field::Field;
use crate::models::format::FormatTag;

lazy_static! {
    static ref CUSTOMER_REFERENCE: Regex = Regex::new(
        r"(?i)Customer Ref\.\s*:\s*([A-Z0-9]+(?:-[A-Z0-9]+)*)\s*-?\s*PO\s+(\d+)"
    ).unwrap();

    static ref SOLD_TO_CODE: Regex = Regex::new(r"Consignee:\s*Code:\s*(\d+)").unwrap();
    static ref SOLD_TO: Regex =
        Regex::new(r"(?s)Consignee:.*?Company\s*(.+?)\s*Customer Ref\.").unwrap();

    // The value runs up to "Import licence" or the end of the text
    static ref TRANSPORT_MODE: Regex =
        Regex::new(r"Mode of transport[:\s]+(.*?)(?:\s+Import licence|\n?\z)").unwrap();

    // "Total: 50 Packages 1,250.000" or "Sales number: ... 25.000 KG 1,250.000"
    static ref NET_WEIGHT: Regex = Regex::new(
        r"(?:Total:\s*\d+\s*Packages\s+|Sales number:.*?\s[\d,]+\.\d{3}\s*KG\s+)([\d,]+\.\d{3})"
    ).unwrap();
}

const FIELDS: [Field; 7] = [
    Field::OrderNumber,
    Field::PurchaseOrderNumber,
    Field::SoldToCode,
    Field::SoldTo,
    Field::Incoterms,
    Field::TransportMode,
    Field::NetWeight,
];

/// Extractor for stand-alone packing lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackingListAltExtractor;

impl DocumentExtractor for PackingListAltExtractor {
    fn format(&self) -> FormatTag {
        FormatTag::PackingListAlt
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

        record.capture(Field::SoldToCode, &SOLD_TO_CODE, text);
        record.capture(Field::SoldTo, &SOLD_TO, text);
        record.capture(Field::Incoterms, &INCOTERMS_LINE, text);
        record.capture(Field::TransportMode, &TRANSPORT_MODE, text);
        record.capture_numeric(Field::NetWeight, &NET_WEIGHT, text);

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
PACKING LIST
Consignee: Code: 2004411
Company Multiform Chemicals (Pvt) Ltd
No 12, Industrial Zone, Ekala
Customer Ref.: SO-2310045 - PO 4500112233
Incoterms: CIF COLOMBO
Mode of transport: SEA FREIGHT Import licence N\u{00b0} 77
Sales number: FL-88231 ETHYL VANILLIN 50 x 25.000 KG 1,250.000
Total: 50 Packages 1,250.000 1,300.000
";

    #[test]
    fn test_extract_packing_list() {
        let record = PackingListAltExtractor.extract(SAMPLE);

        assert_eq!(record.get(Field::OrderNumber), Some("SO-2310045"));
        assert_eq!(record.get(Field::PurchaseOrderNumber), Some("4500112233"));
        assert_eq!(record.get(Field::SoldToCode), Some("2004411"));
        assert_eq!(
            record.get(Field::SoldTo),
            Some("Multiform Chemicals (Pvt) Ltd\nNo 12, Industrial Zone, Ekala")
        );
        assert_eq!(record.get(Field::Incoterms), Some("CIF COLOMBO"));
        assert_eq!(record.get(Field::TransportMode), Some("SEA FREIGHT"));
        assert_eq!(record.get(Field::NetWeight), Some("1250"));
    }

    #[test]
    fn test_net_weight_from_package_total() {
        let record = PackingListAltExtractor.extract("Total: 12 Packages 300.500 310.000");
        assert_eq!(record.get(Field::NetWeight), Some("300.5"));
    }

    #[test]
    fn test_transport_mode_on_last_line() {
        let record = PackingListAltExtractor.extract("Mode of transport: AIR\n");
        assert_eq!(record.get(Field::TransportMode), Some("AIR"));
    }
}
