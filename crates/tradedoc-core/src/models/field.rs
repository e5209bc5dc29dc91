//! Canonical field vocabulary shared by every document format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TradeDocError;

/// A canonical field name.
///
/// Variants are declared in display order, so ordered collections keyed by `Field`
/// iterate the way the comparison table lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "Order Number")]
    OrderNumber,
    #[serde(rename = "Order Type")]
    OrderType,
    #[serde(rename = "Purchase Order Number")]
    PurchaseOrderNumber,
    #[serde(rename = "Price / Unit")]
    PricePerUnit,
    #[serde(rename = "Order Value")]
    OrderValue,
    #[serde(rename = "Product Description")]
    ProductDescription,
    #[serde(rename = "Product Code")]
    ProductCode,
    #[serde(rename = "Material Number")]
    MaterialNumber,
    #[serde(rename = "Specification Number")]
    SpecificationNumber,
    #[serde(rename = "Net Weight (Kg)")]
    NetWeight,
    #[serde(rename = "Sold To")]
    SoldTo,
    #[serde(rename = "Sold To Code")]
    SoldToCode,
    #[serde(rename = "Total Value")]
    TotalValue,
    #[serde(rename = "Currency")]
    Currency,
    #[serde(rename = "Payment Terms")]
    PaymentTerms,
    #[serde(rename = "Incoterms")]
    Incoterms,
    #[serde(rename = "Transport Mode")]
    TransportMode,
    #[serde(rename = "Bank Name")]
    BankName,
    #[serde(rename = "Bank Address")]
    BankAddress,
    #[serde(rename = "Bank City")]
    BankCity,
    #[serde(rename = "Contact")]
    Contact,
    #[serde(rename = "Cell Phone")]
    CellPhone,
    #[serde(rename = "Email")]
    Email,
}

impl Field {
    /// Every canonical field, in display order.
    pub const ALL: [Field; 23] = [
        Field::OrderNumber,
        Field::OrderType,
        Field::PurchaseOrderNumber,
        Field::PricePerUnit,
        Field::OrderValue,
        Field::ProductDescription,
        Field::ProductCode,
        Field::MaterialNumber,
        Field::SpecificationNumber,
        Field::NetWeight,
        Field::SoldTo,
        Field::SoldToCode,
        Field::TotalValue,
        Field::Currency,
        Field::PaymentTerms,
        Field::Incoterms,
        Field::TransportMode,
        Field::BankName,
        Field::BankAddress,
        Field::BankCity,
        Field::Contact,
        Field::CellPhone,
        Field::Email,
    ];

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::OrderNumber => "Order Number",
            Field::OrderType => "Order Type",
            Field::PurchaseOrderNumber => "Purchase Order Number",
            Field::PricePerUnit => "Price / Unit",
            Field::OrderValue => "Order Value",
            Field::ProductDescription => "Product Description",
            Field::ProductCode => "Product Code",
            Field::MaterialNumber => "Material Number",
            Field::SpecificationNumber => "Specification Number",
            Field::NetWeight => "Net Weight (Kg)",
            Field::SoldTo => "Sold To",
            Field::SoldToCode => "Sold To Code",
            Field::TotalValue => "Total Value",
            Field::Currency => "Currency",
            Field::PaymentTerms => "Payment Terms",
            Field::Incoterms => "Incoterms",
            Field::TransportMode => "Transport Mode",
            Field::BankName => "Bank Name",
            Field::BankAddress => "Bank Address",
            Field::BankCity => "Bank City",
            Field::Contact => "Contact",
            Field::CellPhone => "Cell Phone",
            Field::Email => "Email",
        }
    }

    /// Display category this field is grouped under.
    pub fn category(&self) -> FieldCategory {
        match self {
            Field::Currency | Field::PaymentTerms | Field::Incoterms | Field::TransportMode => {
                FieldCategory::CommercialShipping
            }
            Field::BankName
            | Field::BankAddress
            | Field::BankCity
            | Field::Contact
            | Field::CellPhone
            | Field::Email => FieldCategory::BankDetails,
            _ => FieldCategory::OrderDetails,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = TradeDocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TradeDocError::UnknownField(s.to_string()))
    }
}

/// Display grouping of canonical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    /// Order identity, product and quantity fields.
    OrderDetails,
    /// Currency, terms and transport.
    CommercialShipping,
    /// Beneficiary bank and contact details.
    BankDetails,
}

impl FieldCategory {
    /// All categories in display order.
    pub const ALL: [FieldCategory; 3] = [
        FieldCategory::OrderDetails,
        FieldCategory::CommercialShipping,
        FieldCategory::BankDetails,
    ];

    /// Section title.
    pub fn title(&self) -> &'static str {
        match self {
            FieldCategory::OrderDetails => "Order Details",
            FieldCategory::CommercialShipping => "Commercial & Shipping Details",
            FieldCategory::BankDetails => "Bank Details",
        }
    }

    /// Fields in this category, in display order.
    pub fn fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| field.category() == *self)
            .collect()
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialized_names_match_display_names() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_parse_field_name() {
        assert_eq!("Net Weight (Kg)".parse::<Field>().unwrap(), Field::NetWeight);
        assert_eq!("price / unit".parse::<Field>().unwrap(), Field::PricePerUnit);
        assert!("Item".parse::<Field>().is_err());
    }

    #[test]
    fn test_categories_cover_every_field_once() {
        let total: usize = FieldCategory::ALL.iter().map(|c| c.fields().len()).sum();
        assert_eq!(total, Field::ALL.len());

        assert_eq!(
            FieldCategory::CommercialShipping.fields(),
            vec![
                Field::Currency,
                Field::PaymentTerms,
                Field::Incoterms,
                Field::TransportMode
            ]
        );
        assert_eq!(FieldCategory::BankDetails.fields().first(), Some(&Field::BankName));
    }
}
