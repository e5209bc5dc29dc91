//! Proforma invoice (format D).
//!
//! Exported from a spreadsheet, so most values sit behind a "Label:" on their own line
//! and the line item is a single row under a fixed header that ends in "ETA Destination".

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::extract::raw::RawRecord;
use crate::extract::rules::normalize::{
    clean_text, is_numeric_token, normalize_numeric, strip_uppercase_words,
};
use crate::extract::rules::{BankDetails, OrderReference};
use crate::extract::DocumentExtractor;
use crate::models::field::Field;
use crate::models::format::FormatTag;

lazy_static! {
    static ref ORDER_REFERENCE: Regex = Regex::new(r"(\S+)\s+PO\s+(\d+)").unwrap();
    static ref ORDER_TYPE: Regex = Regex::new(r"Order Type:\s*(.+)\s+Customer Ref").unwrap();
    static ref SOLD_TO: Regex = Regex::new(r"(?s)Sold To:\s*(.+?)\s+Transport Mode:").unwrap();
    static ref SOLD_TO_CODE: Regex = Regex::new(r"Sold To Code\s+(\d+)").unwrap();
    static ref TRANSPORT_MODE: Regex = Regex::new(r"Transport Mode:\s*(.+)").unwrap();
    static ref INCOTERMS: Regex = Regex::new(r"Incoterm:\s*(.+)").unwrap();
    static ref CURRENCY: Regex = Regex::new(r"Currency:\s*(.+)").unwrap();
    static ref PAYMENT_TERMS: Regex = Regex::new(r"Payment:\s*(.+)").unwrap();

    // Everything after the header row
    static ref LINE_ITEM: Regex = Regex::new(r"(?s)ETA Destination\s*\n(.*)").unwrap();

    static ref TOTAL_VALUE: Regex = Regex::new(r"Total Value\s+([\d.,]+)").unwrap();

    static ref BANK_NAME: Regex = Regex::new(r"Name:\s*(.+)\s+Packing List").unwrap();
    static ref BANK_ADDRESS: Regex = Regex::new(r"(?s)Address:\s*(.*?)\s*City:").unwrap();
    static ref BANK_CITY: Regex = Regex::new(r"City:\s*(.+)\s").unwrap();

    static ref CONTACT: Regex = Regex::new(r"Contact:\s*(.+)\s").unwrap();
    static ref EMAIL: Regex = Regex::new(r"Email:\s*(.+)\s").unwrap();
    static ref CELL_PHONE: Regex = Regex::new(r"Cell Phone\s*(.+)\s").unwrap();
}

/// Line item columns in sheet order, with the field each one feeds.
const LINE_ITEM_COLUMNS: [(&str, Option<Field>); 14] = [
    ("Sales Org", None),
    ("Del Plant", None),
    ("DG Status", None),
    ("Product Description", Some(Field::ProductDescription)),
    ("Form", None),
    ("Pk Size (KG)", None),
    ("Product Code", Some(Field::ProductCode)),
    ("Net Weight (Kg)", Some(Field::NetWeight)),
    ("Sales Currency", None),
    ("Price / Unit", Some(Field::PricePerUnit)),
    ("Sales Incoterm", None),
    ("Order Value", Some(Field::OrderValue)),
    ("Cust. Reference", None),
    ("ETA Destination", None),
];

const FIELDS: [Field; 21] = [
    Field::OrderNumber,
    Field::PurchaseOrderNumber,
    Field::OrderType,
    Field::SoldTo,
    Field::SoldToCode,
    Field::TransportMode,
    Field::Incoterms,
    Field::Currency,
    Field::PaymentTerms,
    Field::ProductDescription,
    Field::ProductCode,
    Field::NetWeight,
    Field::PricePerUnit,
    Field::OrderValue,
    Field::TotalValue,
    Field::BankName,
    Field::BankAddress,
    Field::BankCity,
    Field::Contact,
    Field::Email,
    Field::CellPhone,
];

/// Extractor for proforma invoices.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProformaInvoiceExtractor;

/// Split the row under the header. Tab-separated when the export kept tabs, otherwise
/// on any whitespace.
fn line_item_cells(row: &str) -> Vec<&str> {
    let trimmed = row.trim();
    if row.contains('\t') {
        trimmed.split('\t').collect()
    } else {
        trimmed.split_whitespace().collect()
    }
}

fn write_line_item(text: &str, record: &mut RawRecord) {
    let Some(caps) = LINE_ITEM.captures(text) else {
        debug!("no line item header found");
        return;
    };

    let cells = line_item_cells(&caps[1]);
    trace!("line item has {} cells", cells.len());

    for ((column, field), cell) in LINE_ITEM_COLUMNS.iter().zip(cells) {
        let Some(field) = field else {
            continue;
        };

        let value = match field {
            Field::ProductDescription => clean_text(cell),
            _ if is_numeric_token(cell) => normalize_numeric(cell),
            _ => cell.trim().to_string(),
        };
        trace!("{} -> {}", column, value);
        record.set(*field, value);
    }
}

fn group_1(pattern: &Regex, text: &str) -> Option<String> {
    pattern.captures(text).map(|caps| caps[1].trim().to_string())
}

fn bank_details(text: &str) -> Option<BankDetails> {
    let name = group_1(&BANK_NAME, text)?;
    let address = group_1(&BANK_ADDRESS, text).map(|raw| strip_uppercase_words(&raw))?;
    let city = group_1(&BANK_CITY, text)?;

    BankDetails::new(&name, &address, &city)
}

impl DocumentExtractor for ProformaInvoiceExtractor {
    fn format(&self) -> FormatTag {
        FormatTag::ProformaInvoice
    }

    fn fields(&self) -> &'static [Field] {
        &FIELDS
    }

    fn extract_raw(&self, text: &str) -> RawRecord {
        let mut record = RawRecord::new(&FIELDS);

        let reference = ORDER_REFERENCE
            .captures(text)
            .and_then(|caps| OrderReference::from_captures(&caps));
        OrderReference::write(reference, &mut record);

        record.capture(Field::OrderType, &ORDER_TYPE, text);
        record.capture(Field::SoldTo, &SOLD_TO, text);
        record.capture(Field::SoldToCode, &SOLD_TO_CODE, text);
        record.capture(Field::TransportMode, &TRANSPORT_MODE, text);
        record.capture(Field::Incoterms, &INCOTERMS, text);
        record.capture(Field::Currency, &CURRENCY, text);
        record.capture(Field::PaymentTerms, &PAYMENT_TERMS, text);

        write_line_item(text, &mut record);

        record.capture_numeric(Field::TotalValue, &TOTAL_VALUE, text);

        BankDetails::write(bank_details(text), &mut record);

        let contact = group_1(&CONTACT, text).map(|value| value.replace("Attn:", ""));
        record.set(Field::Contact, contact);
        record.capture(Field::Email, &EMAIL, text);
        record.capture(Field::CellPhone, &CELL_PHONE, text);

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
PROFORMA INVOICE
Ref SO-2310045 PO 4500112233
Order Type: Export Sales   Customer Ref: 4500112233
Sold To: Multiform Chemicals (Pvt) Ltd
No 12, Industrial Zone, Ekala
Transport Mode: SEA
Sold To Code 2004411
Incoterm: CIF COLOMBO
Currency: USD
Payment: 60 days from B/L date
Sales Org\tDel Plant\tDG Status\tProduct Description\tForm\tPk Size (KG)\tProduct Code\t\
Net Weight (Kg)\tSales Currency\tPrice / Unit\tSales Incoterm\tOrder Value\tCust. Reference\t\
ETA Destination
LK01\tLK10\tNon DG\tETHYL VANILLIN\u{00ae} FCC\tPowder\t25\tFL-88231\t1,250.000\tUSD\t\
14.2000\tCIF\t17,750.00\t4500112233\t30.04.2024
Total Value 17,750.00
Name: COMMERCIAL BANK OF CEYLON PLC Packing List: Required
Address: COMMERCIAL BANK OF CEYLON PLC
No 21 , Sir Razik Fareed Mawatha
City: Colombo 01
Contact: Attn: Nimal Perera
Email: accounts@multiform.lk
Cell Phone +94 77 1234567
";

    #[test]
    fn test_extract_proforma_invoice() {
        let record = ProformaInvoiceExtractor.extract(SAMPLE);

        assert_eq!(record.get(Field::OrderNumber), Some("SO-2310045"));
        assert_eq!(record.get(Field::PurchaseOrderNumber), Some("4500112233"));
        assert_eq!(record.get(Field::OrderType), Some("Export Sales"));
        assert_eq!(
            record.get(Field::SoldTo),
            Some("Multiform Chemicals (Pvt) Ltd\nNo 12, Industrial Zone, Ekala")
        );
        assert_eq!(record.get(Field::SoldToCode), Some("2004411"));
        assert_eq!(record.get(Field::TransportMode), Some("SEA"));
        assert_eq!(record.get(Field::Incoterms), Some("CIF COLOMBO"));
        assert_eq!(record.get(Field::Currency), Some("USD"));
        assert_eq!(record.get(Field::PaymentTerms), Some("60 days from B/L date"));
        assert_eq!(record.get(Field::ProductDescription), Some("ETHYL VANILLIN FCC"));
        assert_eq!(record.get(Field::ProductCode), Some("FL-88231"));
        assert_eq!(record.get(Field::NetWeight), Some("1250"));
        assert_eq!(record.get(Field::PricePerUnit), Some("14.2"));
        assert_eq!(record.get(Field::OrderValue), Some("17750"));
        assert_eq!(record.get(Field::TotalValue), Some("17750"));
        assert_eq!(record.get(Field::BankName), Some("COMMERCIAL BANK OF CEYLON PLC"));
        assert_eq!(
            record.get(Field::BankAddress),
            Some("No 21, Sir Razik Fareed Mawatha")
        );
        assert_eq!(record.get(Field::BankCity), Some("Colombo 01"));
        assert_eq!(record.get(Field::Contact), Some("Nimal Perera"));
        assert_eq!(record.get(Field::Email), Some("accounts@multiform.lk"));
        assert_eq!(record.get(Field::CellPhone), Some("+94 77 1234567"));
    }

    #[test]
    fn test_whitespace_separated_line_item() {
        let text = "ETA Destination\n\
                    LK01 LK10 NDG VANILLIN Powder 25 VN-1 480 USD 12.5 FOB 6,000.00 PO1 2024\n";
        let record = ProformaInvoiceExtractor.extract(text);
        assert_eq!(record.get(Field::ProductDescription), Some("VANILLIN"));
        assert_eq!(record.get(Field::ProductCode), Some("VN-1"));
        assert_eq!(record.get(Field::NetWeight), Some("480"));
        assert_eq!(record.get(Field::PricePerUnit), Some("12.5"));
        assert_eq!(record.get(Field::OrderValue), Some("6000"));
    }

    #[test]
    fn test_short_line_item() {
        let record = ProformaInvoiceExtractor.extract("ETA Destination\nLK01\tLK10\tNDG\tVANILLIN");
        assert_eq!(record.get(Field::ProductDescription), Some("VANILLIN"));
        assert_eq!(record.get(Field::ProductCode), None);
        assert_eq!(record.get(Field::OrderValue), None);
    }

    #[test]
    fn test_bank_requires_all_parts() {
        let text = "Name: Acme Bank Packing List: No\nCity: Colombo 01\n";
        let record = ProformaInvoiceExtractor.extract(text);
        assert_eq!(record.get(Field::BankName), None);
        assert_eq!(record.get(Field::BankAddress), None);
        assert_eq!(record.get(Field::BankCity), None);
    }

    #[test]
    fn test_helper_columns_are_not_fields() {
        let record = ProformaInvoiceExtractor.extract(SAMPLE);
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        for (column, field) in LINE_ITEM_COLUMNS {
            if field.is_none() {
                assert!(!object.contains_key(column), "{column}");
            }
        }
    }
}
