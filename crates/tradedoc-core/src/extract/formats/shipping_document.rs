//! Packing list from the shipping documents (format B).
//!
//! A commercial-invoice style layout: customer block, an order line where the internal
//! order id runs straight into the customer's "PO <digits>", a quantity/price/amount line,
//! a "Sales number:" product line and a beneficiary bank block that may or may not carry
//! a "BANK NAME:" label.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::extract::raw::RawRecord;
use crate::extract::rules::normalize::{clean_text, normalize_numeric};
use crate::extract::rules::patterns::{ATTN_PREFIX, CUSTOMER_BLOCK, INCOTERMS_LINE};
use crate::extract::rules::{find_bank_block, BankDetails, OrderReference};
use crate::extract::DocumentExtractor;
use crate::models::field::Field;
use crate::models::format::FormatTag;

lazy_static! {
    static ref SOLD_TO_CODE: Regex = Regex::new(r"Code[:\s]+(.+?)(?:\n|$)").unwrap();

    static ref PAYMENT_TERMS: Regex =
        Regex::new(r"(?i)Payment\s*terms[:\s]+(.+?)(?:\n|$)").unwrap();

    // "2310045-PO 4500789", "2310045. PO 4500789"
    static ref ORDER_REFERENCE: Regex = Regex::new(r"(?i)(\S+?)\s*\.?\s*PO\s+(\d+)").unwrap();

    // "1000 KG  12.5000  12,500.00"
    static ref QUANTITY_LINE: Regex =
        Regex::new(r"(\d+(?:\.\d+)?\s*KG)\s+(\d+(?:\.\d+)?)\s+([\d,]+\.?\d*)").unwrap();

    static ref SALES_NUMBER: Regex = Regex::new(r"Sales number[:\s]+([A-Z0-9-]+)").unwrap();

    static ref CONTACT: Regex = Regex::new(r"(?i)(?:Contact:|Attn:)\s*(.+?)(?:\n|$)").unwrap();

    static ref EMAIL: Regex = Regex::new(r"([\w.-]+@[\w.-]+\.\w+)").unwrap();

    // Labelled, or a long digit run at the start of a line
    static ref CELL_PHONE: Regex =
        Regex::new(r"(?:Cell Phone[:\s]*|\n)(\+?\d[\d\s]{10,}\d)").unwrap();

    static ref NET_WEIGHT: Regex =
        Regex::new(r"(?i)Total net weight:\s*([\d,.]+)\s*KG").unwrap();

    static ref CURRENCY: Regex = Regex::new(r"Amount\s*\n\s*([A-Z]{3})\b").unwrap();

    static ref SUB_TOTAL: Regex = Regex::new(r"Sub Total\s*([\d,.]+)").unwrap();

    static ref TOTAL_AMOUNT: Regex = Regex::new(r"Total Amount\s*USD\s*([\d,.]+)").unwrap();

    static ref TRANSPORT_MODE: Regex =
        Regex::new(r"(?i)Mode of transport[:\s]*(.+?)(?:\s*\n|$)").unwrap();

    static ref MATERIAL_NUMBER: Regex = Regex::new(r"Material numbers.*?=\s*(\d+)").unwrap();

    static ref SPECIFICATION: Regex = Regex::new(r"Specification number.*?=\s*(\d+)").unwrap();
}

/// Labels that follow an empty "Mode of transport" cell on the same or next line.
const TRANSPORT_LABEL_BLEED: [&str; 3] = ["Import", "N\u{00c2}\u{00b0}", "N\u{00b0}"];

const FIELDS: [Field; 22] = [
    Field::SoldTo,
    Field::SoldToCode,
    Field::Incoterms,
    Field::PaymentTerms,
    Field::OrderNumber,
    Field::PurchaseOrderNumber,
    Field::PricePerUnit,
    Field::ProductCode,
    Field::ProductDescription,
    Field::BankName,
    Field::BankAddress,
    Field::BankCity,
    Field::Contact,
    Field::Email,
    Field::CellPhone,
    Field::NetWeight,
    Field::Currency,
    Field::OrderValue,
    Field::TotalValue,
    Field::TransportMode,
    Field::MaterialNumber,
    Field::SpecificationNumber,
];

/// Extractor for shipping-document packing lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackingListShippingExtractor;

/// First non-empty line after the line carrying "Sales number:".
fn description_after_sales_number(text: &str) -> Option<String> {
    let mut lines = text.lines().skip_while(|line| !line.contains("Sales number:"));
    lines.next()?;

    lines
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(clean_text)
}

fn transport_mode(text: &str) -> Option<String> {
    let caps = TRANSPORT_MODE.captures(text)?;
    let value = caps[1].trim();

    if value.is_empty() || TRANSPORT_LABEL_BLEED.iter().any(|label| value.starts_with(label)) {
        debug!("transport mode cell is empty, found {:?} instead", value);
        return None;
    }

    Some(value.to_string())
}

fn contact(text: &str) -> Option<String> {
    let caps = CONTACT.captures(text)?;
    Some(ATTN_PREFIX.replace(caps[1].trim(), "").into_owned())
}

impl DocumentExtractor for PackingListShippingExtractor {
    fn format(&self) -> FormatTag {
        FormatTag::PackingListShipping
    }

    fn fields(&self) -> &'static [Field] {
        &FIELDS
    }

    fn extract_raw(&self, text: &str) -> RawRecord {
        let mut record = RawRecord::new(&FIELDS);

        record.capture(Field::SoldTo, &CUSTOMER_BLOCK, text);
        record.capture(Field::SoldToCode, &SOLD_TO_CODE, text);
        record.capture(Field::Incoterms, &INCOTERMS_LINE, text);
        record.capture(Field::PaymentTerms, &PAYMENT_TERMS, text);

        let reference = ORDER_REFERENCE
            .captures(text)
            .and_then(|caps| OrderReference::from_captures(&caps));
        OrderReference::write(reference, &mut record);

        let price = QUANTITY_LINE
            .captures(text)
            .map(|caps| normalize_numeric(&caps[2]));
        record.set(Field::PricePerUnit, price);

        record.capture(Field::ProductCode, &SALES_NUMBER, text);
        record.set(Field::ProductDescription, description_after_sales_number(text));

        BankDetails::write(find_bank_block(text), &mut record);

        record.set(Field::Contact, contact(text));
        record.capture(Field::Email, &EMAIL, text);
        record.capture(Field::CellPhone, &CELL_PHONE, text);

        record.capture_numeric(Field::NetWeight, &NET_WEIGHT, text);
        record.capture(Field::Currency, &CURRENCY, text);
        record.capture_numeric(Field::OrderValue, &SUB_TOTAL, text);
        record.capture_numeric(Field::TotalValue, &TOTAL_AMOUNT, text);

        record.set(Field::TransportMode, transport_mode(text));

        record.capture(Field::MaterialNumber, &MATERIAL_NUMBER, text);
        record.capture(Field::SpecificationNumber, &SPECIFICATION, text);

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
PACKING LIST / COMMERCIAL INVOICE
Customer Company Multiform Chemicals (Pvt) Ltd
No 12, Industrial Zone, Ekala

Code: 2004411
Incoterms: CIF COLOMBO
Payment terms: 60 days from B/L date
O/Order number 2310045 / 10 / 1 12 March 2024
Our ref 2310045-PO 4500112233
1250 KG 14.2000 17,750.00
Sales number: FL-88231

ETHYL VANILLIN\u{00ae} FCC 25KG BOX
Material numbers (customer) = 100234
Specification number (customer) = 3301
Total net weight: 1,250.000 KG
Mode of transport: SEA
Sub Total 17,750.00
Total Amount USD 17,750.00
Amount
USD

Remit to:
Hatton National Bank
Trade Operations Dept.
No 479, T B Jayah Mawatha,
Colombo 10
Sri Lanka

Attn: Nimal Perera
+94 77 123 4567 8
accounts@multiform.lk
";

    #[test]
    fn test_extract_shipping_document() {
        let record = PackingListShippingExtractor.extract(SAMPLE);

        assert_eq!(
            record.get(Field::SoldTo),
            Some("Multiform Chemicals (Pvt) Ltd\nNo 12, Industrial Zone, Ekala")
        );
        assert_eq!(record.get(Field::SoldToCode), Some("2004411"));
        assert_eq!(record.get(Field::Incoterms), Some("CIF COLOMBO"));
        assert_eq!(record.get(Field::PaymentTerms), Some("60 days from B/L date"));
        assert_eq!(record.get(Field::OrderNumber), Some("2310045"));
        assert_eq!(record.get(Field::PurchaseOrderNumber), Some("4500112233"));
        assert_eq!(record.get(Field::PricePerUnit), Some("14.2"));
        assert_eq!(record.get(Field::ProductCode), Some("FL-88231"));
        assert_eq!(
            record.get(Field::ProductDescription),
            Some("ETHYL VANILLIN FCC 25KG BOX")
        );
        assert_eq!(record.get(Field::MaterialNumber), Some("100234"));
        assert_eq!(record.get(Field::SpecificationNumber), Some("3301"));
        assert_eq!(record.get(Field::NetWeight), Some("1250"));
        assert_eq!(record.get(Field::TransportMode), Some("SEA"));
        assert_eq!(record.get(Field::OrderValue), Some("17750"));
        assert_eq!(record.get(Field::TotalValue), Some("17750"));
        assert_eq!(record.get(Field::Currency), Some("USD"));
        assert_eq!(record.get(Field::BankName), Some("Hatton National Bank"));
        assert_eq!(
            record.get(Field::BankAddress),
            Some("Trade Operations Dept. No 479, T B Jayah Mawatha,")
        );
        assert_eq!(record.get(Field::BankCity), Some("Colombo 10"));
        assert_eq!(record.get(Field::Contact), Some("Nimal Perera"));
        assert_eq!(record.get(Field::CellPhone), Some("+94 77 123 4567 8"));
        assert_eq!(record.get(Field::Email), Some("accounts@multiform.lk"));
    }

    #[test]
    fn test_labelled_bank_block_wins() {
        let text = "BANK NAME:\nAcme Bank\nLine1\nLine2\nLine3\n\nOther Bank\na\nb\nc\nd";
        let record = PackingListShippingExtractor.extract(text);
        assert_eq!(record.get(Field::BankName), Some("Acme Bank"));
        assert_eq!(record.get(Field::BankAddress), Some("Line1 Line2"));
        assert_eq!(record.get(Field::BankCity), Some("Line3"));
    }

    #[test]
    fn test_empty_transport_mode_is_rejected() {
        let text = "Mode of transport:\nImport licence N\u{00b0} 1234\n";
        let record = PackingListShippingExtractor.extract(text);
        assert_eq!(record.get(Field::TransportMode), None);
    }

    #[test]
    fn test_order_reference_with_trailing_period() {
        let record = PackingListShippingExtractor.extract("Order 2310045. PO 4500112233");
        assert_eq!(record.get(Field::OrderNumber), Some("2310045"));
        assert_eq!(record.get(Field::PurchaseOrderNumber), Some("4500112233"));
    }

    #[test]
    fn test_bank_group_absent_together() {
        let record = PackingListShippingExtractor.extract("Sales number: X1\nNo bank here");
        assert_eq!(record.get(Field::BankName), None);
        assert_eq!(record.get(Field::BankAddress), None);
        assert_eq!(record.get(Field::BankCity), None);
        assert_eq!(record.get(Field::ProductDescription), Some("No bank here"));
    }
}
