//! Multi-field groups that are either extracted whole or not at all.

use regex::Captures;
use tracing::{debug, trace};

use crate::extract::raw::RawRecord;
use crate::models::field::Field;

use super::normalize::clean_order_id;
use super::patterns::{LABELLED_BANK_BLOCK, LABELLED_BANK_NAME, UNLABELLED_BANK_BLOCK};
use super::{first_of, Strategy};

/// Internal order identifier paired with the customer's purchase-order number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReference {
    pub order_number: String,
    pub purchase_order_number: String,
}

impl OrderReference {
    /// Build a pair, stripping the separator left on the order id. Both halves must be
    /// non-empty.
    pub fn new(order_number: &str, purchase_order_number: &str) -> Option<Self> {
        let order_number = clean_order_id(order_number);
        let purchase_order_number = purchase_order_number.trim();

        if order_number.is_empty() || purchase_order_number.is_empty() {
            return None;
        }

        Some(Self {
            order_number: order_number.to_string(),
            purchase_order_number: purchase_order_number.to_string(),
        })
    }

    /// Pair from a match whose groups 1 and 2 hold the order id and PO number.
    pub fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let order = caps.get(1)?.as_str();
        let po = caps.get(2)?.as_str();
        Self::new(order, po)
    }

    /// Write both fields, or clear both.
    pub fn write(reference: Option<Self>, record: &mut RawRecord) {
        match reference {
            Some(reference) => {
                record.set(Field::OrderNumber, reference.order_number);
                record.set(Field::PurchaseOrderNumber, reference.purchase_order_number);
            }
            None => {
                trace!("no order/PO pair found");
                record.set(Field::OrderNumber, None::<String>);
                record.set(Field::PurchaseOrderNumber, None::<String>);
            }
        }
    }
}

/// Beneficiary bank name, street address and city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankDetails {
    pub name: String,
    pub address: String,
    pub city: String,
}

impl BankDetails {
    /// Build the group; every part must be non-empty after trimming.
    pub fn new(name: &str, address: &str, city: &str) -> Option<Self> {
        let (name, address, city) = (name.trim(), address.trim(), city.trim());

        if name.is_empty() || address.is_empty() || city.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            address: address.to_string(),
            city: city.to_string(),
        })
    }

    /// Write all three fields, or clear all three.
    pub fn write(details: Option<Self>, record: &mut RawRecord) {
        match details {
            Some(details) => {
                record.set(Field::BankName, details.name);
                record.set(Field::BankAddress, details.address);
                record.set(Field::BankCity, details.city);
            }
            None => {
                record.set(Field::BankName, None::<String>);
                record.set(Field::BankAddress, None::<String>);
                record.set(Field::BankCity, None::<String>);
            }
        }
    }
}

fn join_address(first: &str, second: &str) -> String {
    format!("{} {}", first.trim(), second.trim())
}

/// "BANK NAME:" on its own line, the name below it, then address, address, city.
fn labelled_bank(text: &str) -> Option<BankDetails> {
    let name = LABELLED_BANK_NAME.captures(text)?;
    let block = LABELLED_BANK_BLOCK.captures(text)?;

    BankDetails::new(&name[1], &join_address(&block[1], &block[2]), &block[3])
}

/// A line ending in "Bank" followed by address, address, city and country lines.
fn unlabelled_bank(text: &str) -> Option<BankDetails> {
    let caps = UNLABELLED_BANK_BLOCK.captures(text)?;
    debug!("using unlabelled bank block starting at {:?}", caps[1].trim());

    BankDetails::new(&caps[1], &join_address(&caps[2], &caps[3]), &caps[4])
}

/// Locate a bank block, trying the labelled layout before the unlabelled one.
pub fn find_bank_block(text: &str) -> Option<BankDetails> {
    let strategies: [Strategy<BankDetails>; 2] = [labelled_bank, unlabelled_bank];
    first_of(text, &strategies)
}
