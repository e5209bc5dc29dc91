//! Document format tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TradeDocError;

/// Which layout heuristics to apply to a document.
///
/// The tag is chosen by the caller from the slot a document was submitted in; it is
/// never inferred from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatTag {
    /// Purchase order terms & conditions (format A).
    PurchaseOrder,
    /// Packing list attached to the shipping documents (format B).
    PackingListShipping,
    /// Order confirmation (format C).
    OrderConfirmation,
    /// Proforma invoice exported from a spreadsheet (format D).
    ProformaInvoice,
    /// Certificate of analysis (format E).
    CertificateOfAnalysis,
    /// Stand-alone packing list (format F).
    PackingListAlt,
}

impl FormatTag {
    /// All formats in letter-code order.
    pub const ALL: [FormatTag; 6] = [
        FormatTag::PurchaseOrder,
        FormatTag::PackingListShipping,
        FormatTag::OrderConfirmation,
        FormatTag::ProformaInvoice,
        FormatTag::CertificateOfAnalysis,
        FormatTag::PackingListAlt,
    ];

    /// Column order of the comparison table. The proforma invoice comes first because it
    /// is the reference every other document is checked against.
    pub const COMPARISON_ORDER: [FormatTag; 6] = [
        FormatTag::ProformaInvoice,
        FormatTag::OrderConfirmation,
        FormatTag::PurchaseOrder,
        FormatTag::PackingListShipping,
        FormatTag::CertificateOfAnalysis,
        FormatTag::PackingListAlt,
    ];

    /// Single-letter code of the upload slot.
    pub fn code(&self) -> char {
        match self {
            FormatTag::PurchaseOrder => 'A',
            FormatTag::PackingListShipping => 'B',
            FormatTag::OrderConfirmation => 'C',
            FormatTag::ProformaInvoice => 'D',
            FormatTag::CertificateOfAnalysis => 'E',
            FormatTag::PackingListAlt => 'F',
        }
    }

    /// Human-readable document name.
    pub fn document_name(&self) -> &'static str {
        match self {
            FormatTag::PurchaseOrder => "Purchase Order",
            FormatTag::PackingListShipping => "Invoice - Shipping Document",
            FormatTag::OrderConfirmation => "Order Confirmation",
            FormatTag::ProformaInvoice => "Proforma Invoice",
            FormatTag::CertificateOfAnalysis => "Certificate of Analysis",
            FormatTag::PackingListAlt => "Packing List",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            FormatTag::PurchaseOrder => "purchase-order",
            FormatTag::PackingListShipping => "packing-list-shipping",
            FormatTag::OrderConfirmation => "order-confirmation",
            FormatTag::ProformaInvoice => "proforma-invoice",
            FormatTag::CertificateOfAnalysis => "certificate-of-analysis",
            FormatTag::PackingListAlt => "packing-list-alt",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FormatTag {
    type Err = TradeDocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");

        let tag = match normalized.as_str() {
            "a" | "po" => Some(FormatTag::PurchaseOrder),
            "b" | "shipping" | "invoice" => Some(FormatTag::PackingListShipping),
            "c" | "oc" => Some(FormatTag::OrderConfirmation),
            "d" | "proforma" => Some(FormatTag::ProformaInvoice),
            "e" | "coa" => Some(FormatTag::CertificateOfAnalysis),
            "f" | "packing-list" => Some(FormatTag::PackingListAlt),
            other => FormatTag::ALL.iter().copied().find(|tag| tag.slug() == other),
        };

        tag.ok_or_else(|| TradeDocError::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_letter_codes() {
        for tag in FormatTag::ALL {
            let code = tag.code().to_string();
            assert_eq!(code.parse::<FormatTag>().unwrap(), tag);
            assert_eq!(code.to_lowercase().parse::<FormatTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "certificate_of_analysis".parse::<FormatTag>().unwrap(),
            FormatTag::CertificateOfAnalysis
        );
        assert_eq!("coa".parse::<FormatTag>().unwrap(), FormatTag::CertificateOfAnalysis);
        assert_eq!(
            FormatTag::ProformaInvoice.to_string().parse::<FormatTag>().unwrap(),
            FormatTag::ProformaInvoice
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "G".parse::<FormatTag>(),
            Err(TradeDocError::UnknownFormat(_))
        ));
        assert!("".parse::<FormatTag>().is_err());
    }
}
