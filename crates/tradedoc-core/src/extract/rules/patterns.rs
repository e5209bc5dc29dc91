//! Regex patterns shared by more than one document format.
//!
//! Format-specific patterns live next to their extractor.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Bank block with an explicit label: name on the line after "BANK NAME:",
    // then two address lines and a city line.
    pub static ref LABELLED_BANK_NAME: Regex = Regex::new(
        r"(?i)BANK NAME:\s*\n([^\n]+)"
    ).unwrap();

    pub static ref LABELLED_BANK_BLOCK: Regex = Regex::new(
        r"(?i)BANK NAME:[\s\S]*?\n[^\n]+\n([^\n]+)\n([^\n]+)\n([^\n]+)"
    ).unwrap();

    // Unlabelled bank block: a line ending in "Bank" followed by four more lines
    // (two address lines, city, country).
    pub static ref UNLABELLED_BANK_BLOCK: Regex = Regex::new(
        r"(?i)\b([A-Z][^\n]*Bank)\s*\n([^\n]+)\s*\n([^\n]+)\s*\n([^\n]+)\s*\n([^\n]+)"
    ).unwrap();

    // Customer block up to the next blank line
    pub static ref CUSTOMER_BLOCK: Regex = Regex::new(
        r"(?is)Customer\s+(?:Company\s*)?(.*?)(?:\n\s*\n|$)"
    ).unwrap();

    pub static ref INCOTERMS_LINE: Regex = Regex::new(
        r"Incoterms[:\s]+(.+?)(?:\n|$)"
    ).unwrap();

    pub static ref ATTN_PREFIX: Regex = Regex::new(
        r"(?i)^Attn:\s*"
    ).unwrap();

    // Value cleanup
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(
        r"^[\d,]+(?:\.\d+)?$"
    ).unwrap();

    pub static ref UPPERCASE_WORDS: Regex = Regex::new(
        r"\b[A-Z]{2,}(?:\s+[A-Z]{2,})*\b"
    ).unwrap();

    pub static ref SPACE_RUNS: Regex = Regex::new(
        r"\s{2,}"
    ).unwrap();

    pub static ref SPACE_BEFORE_COMMA: Regex = Regex::new(
        r"\s+,"
    ).unwrap();
}
