//! Cross-document comparison of extracted records.
//!
//! Builds the field-by-document grid: one section per field category, one row per field
//! that any supplied document carries, one cell per supplied document. The proforma
//! invoice is the reference; when it has no value for a field, documents other than the
//! purchase order are checked against the purchase order instead.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::models::field::{Field, FieldCategory};
use crate::models::format::FormatTag;
use crate::models::record::FieldRecord;

/// Outcome of checking one document's value for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    /// The proforma invoice's own value.
    Reference,
    /// Equal to the reference value.
    Match,
    /// Different from the reference value.
    Mismatch,
    /// A value, but nothing to check it against.
    Unchecked,
    /// No value in this document.
    Missing,
}

impl CellStatus {
    /// Short marker for plain-text tables.
    pub fn symbol(&self) -> &'static str {
        match self {
            CellStatus::Reference => "=",
            CellStatus::Match => "✓",
            CellStatus::Mismatch => "✗",
            CellStatus::Unchecked => "?",
            CellStatus::Missing => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonCell {
    pub format: FormatTag,
    pub value: Option<String>,
    pub status: CellStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub field: Field,
    pub cells: Vec<ComparisonCell>,
}

impl ComparisonRow {
    /// Cell for one document, if that document was supplied.
    pub fn cell(&self, format: FormatTag) -> Option<&ComparisonCell> {
        self.cells.iter().find(|c| c.format == format)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSection {
    pub category: FieldCategory,
    pub rows: Vec<ComparisonRow>,
}

/// The full comparison grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Supplied documents, in column order.
    pub documents: Vec<FormatTag>,
    /// Non-empty sections, in category order.
    pub sections: Vec<ComparisonSection>,
}

impl Comparison {
    fn count(&self, status: CellStatus) -> usize {
        self.rows()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.status == status)
            .count()
    }

    /// All rows across sections.
    pub fn rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    pub fn matches(&self) -> usize {
        self.count(CellStatus::Match)
    }

    pub fn mismatches(&self) -> usize {
        self.count(CellStatus::Mismatch)
    }

    /// Whether every checked value agreed with its reference.
    pub fn is_consistent(&self) -> bool {
        self.mismatches() == 0
    }
}

fn check(value: Option<&str>, reference: Option<&str>) -> CellStatus {
    match (value, reference) {
        (None, _) => CellStatus::Missing,
        (Some(_), None) => CellStatus::Unchecked,
        (Some(v), Some(r)) if v == r => CellStatus::Match,
        (Some(_), Some(_)) => CellStatus::Mismatch,
    }
}

fn build_row(
    field: Field,
    documents: &[FormatTag],
    records: &BTreeMap<FormatTag, FieldRecord>,
) -> ComparisonRow {
    let value_in = |format: FormatTag| records.get(&format).and_then(|r| r.get(field));

    let proforma = value_in(FormatTag::ProformaInvoice);
    let purchase_order = value_in(FormatTag::PurchaseOrder);

    let cells = documents
        .iter()
        .map(|&format| {
            let value = value_in(format);
            let status = match format {
                FormatTag::ProformaInvoice => match value {
                    Some(_) => CellStatus::Reference,
                    None => CellStatus::Missing,
                },
                FormatTag::PurchaseOrder => check(value, proforma),
                _ => check(value, proforma.or(purchase_order)),
            };

            ComparisonCell {
                format,
                value: value.map(str::to_string),
                status,
            }
        })
        .collect();

    ComparisonRow { field, cells }
}

/// Compare the extracted records of up to six documents.
pub fn compare(records: &BTreeMap<FormatTag, FieldRecord>) -> Comparison {
    let documents: Vec<FormatTag> = FormatTag::COMPARISON_ORDER
        .into_iter()
        .filter(|format| records.contains_key(format))
        .collect();

    let sections: Vec<ComparisonSection> = FieldCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let rows: Vec<ComparisonRow> = category
                .fields()
                .into_iter()
                .filter(|field| records.values().any(|r| r.contains(*field)))
                .map(|field| build_row(field, &documents, records))
                .collect();

            if rows.is_empty() {
                None
            } else {
                Some(ComparisonSection { category, rows })
            }
        })
        .collect();

    let comparison = Comparison { documents, sections };
    debug!(
        "Compared {} documents: {} matches, {} mismatches",
        comparison.documents.len(),
        comparison.matches(),
        comparison.mismatches()
    );

    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(values: &[(Field, Option<&str>)]) -> FieldRecord {
        FieldRecord::from_values(
            values
                .iter()
                .map(|(f, v)| (*f, v.map(str::to_string)))
                .collect(),
        )
    }

    fn statuses(row: &ComparisonRow) -> Vec<CellStatus> {
        row.cells.iter().map(|c| c.status).collect()
    }

    #[test]
    fn test_proforma_is_reference() {
        let mut records = BTreeMap::new();
        records.insert(
            FormatTag::ProformaInvoice,
            record(&[(Field::Incoterms, Some("CIF COLOMBO"))]),
        );
        records.insert(
            FormatTag::OrderConfirmation,
            record(&[(Field::Incoterms, Some("CIF COLOMBO"))]),
        );
        records.insert(
            FormatTag::PackingListAlt,
            record(&[(Field::Incoterms, Some("FOB COLOMBO"))]),
        );

        let comparison = compare(&records);
        assert_eq!(
            comparison.documents,
            vec![
                FormatTag::ProformaInvoice,
                FormatTag::OrderConfirmation,
                FormatTag::PackingListAlt
            ]
        );

        let row = comparison.rows().next().unwrap();
        assert_eq!(row.field, Field::Incoterms);
        assert_eq!(
            statuses(row),
            vec![CellStatus::Reference, CellStatus::Match, CellStatus::Mismatch]
        );
        assert_eq!(comparison.matches(), 1);
        assert_eq!(comparison.mismatches(), 1);
        assert!(!comparison.is_consistent());
    }

    #[test]
    fn test_falls_back_to_purchase_order() {
        let mut records = BTreeMap::new();
        records.insert(FormatTag::ProformaInvoice, record(&[(Field::MaterialNumber, None)]));
        records.insert(
            FormatTag::PurchaseOrder,
            record(&[(Field::MaterialNumber, Some("100234"))]),
        );
        records.insert(
            FormatTag::CertificateOfAnalysis,
            record(&[(Field::MaterialNumber, Some("100234"))]),
        );

        let comparison = compare(&records);
        let row = comparison.rows().next().unwrap();

        assert_eq!(row.cell(FormatTag::ProformaInvoice).unwrap().status, CellStatus::Missing);
        // the purchase order is only ever checked against the proforma
        assert_eq!(row.cell(FormatTag::PurchaseOrder).unwrap().status, CellStatus::Unchecked);
        assert_eq!(
            row.cell(FormatTag::CertificateOfAnalysis).unwrap().status,
            CellStatus::Match
        );
    }

    #[test]
    fn test_sections_follow_categories() {
        let mut records = BTreeMap::new();
        records.insert(
            FormatTag::OrderConfirmation,
            record(&[
                (Field::BankName, Some("Acme Bank")),
                (Field::OrderNumber, Some("2310045")),
            ]),
        );

        let comparison = compare(&records);
        let categories: Vec<FieldCategory> =
            comparison.sections.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![FieldCategory::OrderDetails, FieldCategory::BankDetails]
        );

        let row = comparison.rows().next().unwrap();
        assert_eq!(statuses(row), vec![CellStatus::Unchecked]);
    }

    #[test]
    fn test_empty_input() {
        let comparison = compare(&BTreeMap::new());
        assert!(comparison.documents.is_empty());
        assert!(comparison.sections.is_empty());
        assert!(comparison.is_consistent());
    }

    #[test]
    fn test_document_without_field_is_missing() {
        let mut records = BTreeMap::new();
        records.insert(
            FormatTag::ProformaInvoice,
            record(&[(Field::BankCity, Some("Colombo 01"))]),
        );
        records.insert(
            FormatTag::CertificateOfAnalysis,
            record(&[(Field::NetWeight, Some("1250"))]),
        );

        let comparison = compare(&records);
        let bank_city = comparison.rows().find(|r| r.field == Field::BankCity).unwrap();
        assert_eq!(
            statuses(bank_city),
            vec![CellStatus::Reference, CellStatus::Missing]
        );
    }
}
