//! Order confirmation (format C).
//!
//! The supplier's confirmation of a customer order. The product block comes in two
//! layouts: with a "Sales number:" line followed by the description, or as a bare
//! description/code line right under the quantity line. Both end at "Incoterms:".

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::extract::raw::RawRecord;
use crate::extract::rules::normalize::{clean_text, normalize_numeric};
use crate::extract::rules::patterns::{ATTN_PREFIX, CUSTOMER_BLOCK, INCOTERMS_LINE};
use crate::extract::rules::{
    find_bank_block, first_captures, first_of, BankDetails, OrderReference, Strategy,
};
use crate::extract::DocumentExtractor;
use crate::models::field::Field;
use crate::models::format::FormatTag;

lazy_static! {
    // "Order number: 2310045 - PO 4500789"
    static ref ORDER_REFERENCE: Regex =
        Regex::new(r"(?i)Order\s+(?:number|No)[:\s]+(.+?)\s+-?\s*PO\s+(\d+)").unwrap();

    static ref SOLD_TO_CODE: Regex = Regex::new(r"Code[:\s]+([\d/-]+)").unwrap();
    static ref TRANSPORT_MODE: Regex = Regex::new(r"Mode of Transport[:\s]+(.+?)(?:\n|$)").unwrap();
    static ref CURRENCY: Regex = Regex::new(r"Total Amount\s+([A-Z]{3})").unwrap();
    static ref PAYMENT_TERMS: Regex = Regex::new(r"Payment Terms[:\s]+(.+?)(?:\n|$)").unwrap();

    // Product block, layout 1
    static ref SALES_NUMBER: Regex = Regex::new(r"(?i)Sales number[:\s]+(.+?)(?:\n|$)").unwrap();
    static ref SALES_DESCRIPTION: Regex =
        Regex::new(r"(?is)Sales number[:\s].*?\n(.*?)\nIncoterms:").unwrap();

    // Product block, layout 2: "<qty> KG <price> <amount>" then "<description> <code>"
    static ref QUANTITY_PRODUCT: Regex = Regex::new(
        r"(?i)KG\s+[\d.]+\s+[\d,.]+\s*\n(.+?)\s+([A-Z0-9]+)\s*\nIncoterms:"
    ).unwrap();

    static ref NET_WEIGHT: Regex =
        Regex::new(r"(?i)Total net weight[:\s]+([\d,.]+)\s*KG").unwrap();

    // Unit prices carry four decimals, amounts two
    static ref PRICE: Regex = Regex::new(r"(\d+\.\d{4})").unwrap();
    static ref ORDER_VALUE: Regex = Regex::new(r"(\d{1,3}(?:,\d{3})*\.\d{2})\b").unwrap();

    static ref TOTAL_VALUE: Regex = Regex::new(r"(?i)Total Amount USD[:\s]+([\d,.]+)").unwrap();

    static ref CONTACT: Regex =
        Regex::new(r"(?im)(?:Contact[:\s]+|^)(Attn:\s*.*?)(?:\n|$)").unwrap();
    static ref CONTACT_LINE: Regex = Regex::new(r"(?im)^Attn:\s*(.*)$").unwrap();

    static ref EMAIL: Regex = Regex::new(
        r"(?i)(?:Email[:\s]+)?([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})"
    ).unwrap();

    static ref CELL_PHONE_LABELLED: Regex = Regex::new(r"Cell Phone[:\s]+(.+?)(?:\n|$)").unwrap();
    static ref CELL_PHONE_BARE: Regex =
        Regex::new(r"(\+?\d{4}\s?\d{9}|\d{4}\s?\d{9})").unwrap();
}

const FIELDS: [Field; 20] = [
    Field::OrderNumber,
    Field::PurchaseOrderNumber,
    Field::SoldTo,
    Field::SoldToCode,
    Field::TransportMode,
    Field::Incoterms,
    Field::Currency,
    Field::PaymentTerms,
    Field::ProductCode,
    Field::ProductDescription,
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

/// Product code and description, as found by one of the product layouts.
type Product = (String, Option<String>);

fn product_by_sales_number(text: &str) -> Option<Product> {
    let code = SALES_NUMBER.captures(text)?[1].trim().to_string();
    let description = SALES_DESCRIPTION
        .captures(text)
        .map(|caps| clean_text(&caps[1]));

    Some((code, description))
}

fn product_by_quantity_line(text: &str) -> Option<Product> {
    let caps = QUANTITY_PRODUCT.captures(text)?;
    debug!("no sales number, product taken from the line under the quantity");

    Some((caps[2].trim().to_string(), Some(clean_text(&caps[1]))))
}

fn contact(text: &str) -> Option<String> {
    let caps = first_captures(text, &[&CONTACT, &CONTACT_LINE])?;
    Some(ATTN_PREFIX.replace(caps[1].trim(), "").into_owned())
}

/// Extractor for order confirmations.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderConfirmationExtractor;

impl DocumentExtractor for OrderConfirmationExtractor {
    fn format(&self) -> FormatTag {
        FormatTag::OrderConfirmation
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

        record.capture(Field::SoldTo, &CUSTOMER_BLOCK, text);
        record.capture(Field::SoldToCode, &SOLD_TO_CODE, text);
        record.capture(Field::TransportMode, &TRANSPORT_MODE, text);
        record.capture(Field::Incoterms, &INCOTERMS_LINE, text);
        record.capture(Field::Currency, &CURRENCY, text);
        record.capture(Field::PaymentTerms, &PAYMENT_TERMS, text);

        let layouts: [Strategy<Product>; 2] = [product_by_sales_number, product_by_quantity_line];
        let (code, description) = match first_of(text, &layouts) {
            Some((code, description)) => (Some(code), description),
            None => (None, None),
        };
        record.set(Field::ProductCode, code);
        record.set(Field::ProductDescription, description);

        record.capture_numeric(Field::NetWeight, &NET_WEIGHT, text);
        record.capture_numeric(Field::PricePerUnit, &PRICE, text);
        record.capture_numeric(Field::OrderValue, &ORDER_VALUE, text);
        record.capture_numeric(Field::TotalValue, &TOTAL_VALUE, text);

        BankDetails::write(find_bank_block(text), &mut record);

        record.set(Field::Contact, contact(text));
        record.capture(Field::Email, &EMAIL, text);
        record.set(
            Field::CellPhone,
            first_captures(text, &[&CELL_PHONE_LABELLED, &CELL_PHONE_BARE]),
        );

        record
    }
}
