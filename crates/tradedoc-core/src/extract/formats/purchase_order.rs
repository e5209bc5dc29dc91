//! Purchase order terms & conditions (format A).
//!
//! The customer's own order document. It names the purchase-order number directly, so no
//! order/PO pair is involved. Line items look like
//! `10  100234  VANILLA EXTRACT NAT  GIVAUDAN  FL-2231` with quantity, price and value
//! columns elsewhere on the page.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::extract::raw::RawRecord;
use crate::extract::rules::normalize::{clean_text, normalize_numeric};
use crate::extract::DocumentExtractor;
use crate::models::field::Field;
use crate::models::format::FormatTag;

lazy_static! {
    static ref PO_NUMBER: Regex = Regex::new(r"Purchase order\s*:\s*(\S+)").unwrap();

    static ref INVOICE_TO: Regex = Regex::new(r"(?s)Invoice To:\s*(.*?)(?:\n\s*\n|$)").unwrap();

    static ref CURRENCY: Regex = Regex::new(r"Currency[:\s]+(\S+)").unwrap();

    static ref PAYMENT_TERMS: Regex = Regex::new(r"Terms of Payment\s*:\s*([^\n_]+)").unwrap();

    // Second number on a line that starts with the item number
    static ref MATERIAL_NUMBER: Regex = Regex::new(r"(?m)^\s*\d+\s+(\d+)").unwrap();

    static ref QUANTITY: Regex = Regex::new(r"(?i)([\d,]+\.\d+)\s*(?:kg|g|l|ml)").unwrap();

    // Unit price followed by the net line value
    static ref PRICE_AND_VALUE: Regex = Regex::new(r"(\d+\.\d{2})\s+(\d+,\d+\.\d{2})").unwrap();

    static ref TOTAL_VALUE: Regex =
        Regex::new(r"Total net value excl\. tax\s+([\d,]+\.\d{2})").unwrap();

    // item, material, description, brand token, supplier product code
    static ref PRODUCT_LINE: Regex =
        Regex::new(r"(?im)\b\d+\s+\d+\s+(.+?)\s+(GIV(?:AUDAN)?)\s+(.+?)\s*$").unwrap();

    static ref SPECIFICATION: Regex =
        Regex::new(r"As per\s+[Ss]pecification number[:\s]+(\d+)").unwrap();
}

const FIELDS: [Field; 12] = [
    Field::PurchaseOrderNumber,
    Field::SoldTo,
    Field::Currency,
    Field::PaymentTerms,
    Field::MaterialNumber,
    Field::NetWeight,
    Field::PricePerUnit,
    Field::OrderValue,
    Field::TotalValue,
    Field::ProductDescription,
    Field::ProductCode,
    Field::SpecificationNumber,
];

/// Extractor for purchase orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseOrderExtractor;

impl DocumentExtractor for PurchaseOrderExtractor {
    fn format(&self) -> FormatTag {
        FormatTag::PurchaseOrder
    }

    fn fields(&self) -> &'static [Field] {
        &FIELDS
    }

    fn extract_raw(&self, text: &str) -> RawRecord {
        let mut record = RawRecord::new(&FIELDS);

        record.capture(Field::PurchaseOrderNumber, &PO_NUMBER, text);
        record.capture(Field::SoldTo, &INVOICE_TO, text);
        record.capture(Field::Currency, &CURRENCY, text);
        record.capture(Field::PaymentTerms, &PAYMENT_TERMS, text);
        record.capture(Field::MaterialNumber, &MATERIAL_NUMBER, text);
        record.capture_numeric(Field::NetWeight, &QUANTITY, text);

        if let Some(caps) = PRICE_AND_VALUE.captures(text) {
            record.set(Field::PricePerUnit, normalize_numeric(&caps[1]));
            record.set(Field::OrderValue, normalize_numeric(&caps[2]));
        }

        record.capture_numeric(Field::TotalValue, &TOTAL_VALUE, text);

        if let Some(caps) = PRODUCT_LINE.captures(text) {
            trace!("product line brand token: {}", &caps[2]);
            record.set(Field::ProductDescription, clean_text(&caps[1]));
            record.set(Field::ProductCode, caps[3].trim());
        }

        record.capture(Field::SpecificationNumber, &SPECIFICATION, text);

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
PURCHASE ORDER
Purchase order : 4500112233
Date : 12.03.2024

Invoice To: Multiform Chemicals (Pvt) Ltd
No 12, Industrial Zone
Ekala, Ja-Ela

Currency: USD
Terms of Payment : 60 days net___________

Item Material  Description                         Quantity   Price      Net value
10 100234 ETHYL VANILLIN\u{00ae} FCC GIVAUDAN FL-88231
Delivery 30.04.2024   1,250.000 KG   14.20 17,750.00
PO against Contract: 7700001
Total net value excl. tax 17,750.00
As per specification number: 3301
";

    #[test]
    fn test_extract_purchase_order() {
        let record = PurchaseOrderExtractor.extract(SAMPLE);

        assert_eq!(record.get(Field::PurchaseOrderNumber), Some("4500112233"));
        assert_eq!(
            record.get(Field::SoldTo),
            Some("Multiform Chemicals (Pvt) Ltd\nNo 12, Industrial Zone\nEkala, Ja-Ela")
        );
        assert_eq!(record.get(Field::Currency), Some("USD"));
        assert_eq!(record.get(Field::PaymentTerms), Some("60 days net"));
        assert_eq!(record.get(Field::MaterialNumber), Some("100234"));
        assert_eq!(record.get(Field::NetWeight), Some("1250"));
        assert_eq!(record.get(Field::PricePerUnit), Some("14.2"));
        assert_eq!(record.get(Field::OrderValue), Some("17750"));
        assert_eq!(record.get(Field::TotalValue), Some("17750"));
        assert_eq!(record.get(Field::ProductDescription), Some("ETHYL VANILLIN FCC"));
        assert_eq!(record.get(Field::ProductCode), Some("FL-88231"));
        assert_eq!(record.get(Field::SpecificationNumber), Some("3301"));
    }

    #[test]
    fn test_helper_keys_never_leak() {
        for text in [SAMPLE, "", "10 20 Item Unit"] {
            let record = PurchaseOrderExtractor.extract(text);
            let json = serde_json::to_value(&record).unwrap();
            let object = json.as_object().unwrap();
            for helper in ["Item", "Unit", "PO against Contract"] {
                assert!(!object.contains_key(helper));
            }
            assert!(!record.contains(Field::OrderNumber));
        }
    }

    #[test]
    fn test_missing_anchors() {
        let record = PurchaseOrderExtractor.extract("Purchase order : 4500000001");
        assert_eq!(record.get(Field::PurchaseOrderNumber), Some("4500000001"));
        assert_eq!(record.get(Field::NetWeight), None);
        assert_eq!(record.get(Field::ProductCode), None);
        assert_eq!(record.len(), FIELDS.len());
    }
}
