//! Intermediate extraction results and the coercion pass.

use std::collections::BTreeMap;

use regex::{Captures, Regex};

use crate::models::field::Field;
use crate::models::record::FieldRecord;

use super::rules::normalize::{clean_text, normalize_numeric};

/// Outcome of one field's pattern chain, before coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// A pattern matched. `group` is the first capture group when it took part in the match.
    Matched { whole: String, group: Option<String> },
    /// A value computed directly by the extractor.
    Text(String),
    /// Nothing found.
    Absent,
}

impl RawValue {
    /// Convert to the final value: first capture group, else the whole match, else the
    /// direct text, trimmed. Empty results become `None`.
    pub fn coerce(self) -> Option<String> {
        let value = match self {
            RawValue::Matched { whole, group } => group.unwrap_or(whole),
            RawValue::Text(text) => text,
            RawValue::Absent => return None,
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Absent)
    }
}

impl From<Captures<'_>> for RawValue {
    fn from(caps: Captures<'_>) -> Self {
        RawValue::Matched {
            whole: caps[0].to_string(),
            group: caps.get(1).map(|m| m.as_str().to_string()),
        }
    }
}

impl From<Option<Captures<'_>>> for RawValue {
    fn from(caps: Option<Captures<'_>>) -> Self {
        caps.map(RawValue::from).unwrap_or(RawValue::Absent)
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<Option<String>> for RawValue {
    fn from(text: Option<String>) -> Self {
        text.map(RawValue::Text).unwrap_or(RawValue::Absent)
    }
}

/// Field values gathered by one extractor run.
///
/// Seeded with `Absent` for every field the extractor declares; fields outside that set
/// are never recorded. The only way out is [`RawRecord::coerce`].
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    values: BTreeMap<Field, RawValue>,
}

impl RawRecord {
    /// A record declaring `fields`, all absent.
    pub fn new(fields: &[Field]) -> Self {
        Self {
            values: fields.iter().map(|f| (*f, RawValue::Absent)).collect(),
        }
    }

    /// Record a value for a declared field.
    pub fn set(&mut self, field: Field, value: impl Into<RawValue>) {
        debug_assert!(
            self.values.contains_key(&field),
            "{field} is not declared by this extractor"
        );
        if let Some(slot) = self.values.get_mut(&field) {
            *slot = value.into();
        }
    }

    /// Record the outcome of a single pattern attempt.
    pub fn capture(&mut self, field: Field, pattern: &Regex, text: &str) {
        self.set(field, pattern.captures(text));
    }

    /// Record the first capture group after numeric cleanup.
    pub fn capture_numeric(&mut self, field: Field, pattern: &Regex, text: &str) {
        let value = pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| normalize_numeric(m.as_str()));
        self.set(field, value);
    }

    /// Record the first capture group after free-text cleanup.
    pub fn capture_text(&mut self, field: Field, pattern: &Regex, text: &str) {
        let value = pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| clean_text(m.as_str()));
        self.set(field, value);
    }

    pub fn get(&self, field: Field) -> Option<&RawValue> {
        self.values.get(&field)
    }

    /// Declared fields.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.values.keys().copied()
    }

    /// Run the coercion pass over every entry.
    pub fn coerce(self) -> FieldRecord {
        FieldRecord::from_values(
            self.values
                .into_iter()
                .map(|(field, raw)| (field, raw.coerce()))
                .collect(),
        )
    }
}
