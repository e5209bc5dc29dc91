//! The normalized output record of one extraction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Flat mapping of canonical field to normalized value.
///
/// A key that is present with `None` means the extractor looked for the field and found
/// nothing; a missing key means the document format does not carry that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRecord {
    values: BTreeMap<Field, Option<String>>,
}

impl FieldRecord {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_values(values: BTreeMap<Field, Option<String>>) -> Self {
        Self { values }
    }

    /// Value of a field, if the field was extracted.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).and_then(|v| v.as_deref())
    }

    /// Whether the record carries the field key at all.
    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    /// Iterate over all keys with their optional values, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<&str>)> {
        self.values.iter().map(|(k, v)| (*k, v.as_deref()))
    }

    /// Iterate over fields that have a value.
    pub fn present(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
    }

    /// Fields carried by this record.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.values.keys().copied()
    }

    /// Number of keys (including empty ones).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
