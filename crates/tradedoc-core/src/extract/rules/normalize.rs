//! Value cleanup shared by all extractors.

use super::patterns::{NUMERIC_TOKEN, SPACE_BEFORE_COMMA, SPACE_RUNS, UPPERCASE_WORDS};

/// OCR/encoding debris that shows up in product descriptions.
const NOISE_CHARS: [char; 5] = ['\u{00c2}', '\u{00b0}', '\u{2122}', '\u{00ae}', '\u{00a0}'];

/// Strip thousands separators and insignificant fractional zeros.
///
/// `"1,250.500"` becomes `"1250.5"`, `"1,200.00"` becomes `"1200"`. Values without a
/// decimal point only lose their separators.
pub fn normalize_numeric(value: &str) -> String {
    let digits = value.trim().replace(',', "");

    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        digits
    }
}

/// Whether a token looks like a plain quantity or amount (`12,500.00`, `480`).
pub fn is_numeric_token(value: &str) -> bool {
    NUMERIC_TOKEN.is_match(value.trim())
}

/// Drop noise characters and any other non-ASCII code point, then collapse whitespace.
pub fn clean_text(value: &str) -> String {
    let ascii: String = value
        .chars()
        .filter(|c| !NOISE_CHARS.contains(c) && c.is_ascii())
        .collect();

    ascii.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove runs of all-caps words (bank and branch names that precede the street address)
/// and tidy the spacing left behind.
pub fn strip_uppercase_words(value: &str) -> String {
    let without_caps = UPPERCASE_WORDS.replace_all(value.trim(), "");
    let collapsed = SPACE_RUNS.replace_all(&without_caps, " ");
    SPACE_BEFORE_COMMA
        .replace_all(collapsed.trim(), ",")
        .into_owned()
}

/// Order identifiers sometimes keep the separator that stood before "PO".
pub fn clean_order_id(value: &str) -> &str {
    value.trim().trim_end_matches(['-', '.']).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_numeric() {
        assert_eq!(normalize_numeric("1,200.00"), "1200");
        assert_eq!(normalize_numeric("1,234.50"), "1234.5");
        assert_eq!(normalize_numeric("1,250.500"), "1250.5");
        assert_eq!(normalize_numeric("500"), "500");
        assert_eq!(normalize_numeric("12,500"), "12500");
        assert_eq!(normalize_numeric("3.1250"), "3.125");
        assert_eq!(normalize_numeric("0.00"), "0");
    }

    #[test]
    fn test_numeric_token() {
        assert!(is_numeric_token("12,500.00"));
        assert!(is_numeric_token(" 480 "));
        assert!(!is_numeric_token("USD"));
        assert!(!is_numeric_token("25KG"));
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(
            clean_text("  ETHYL VANILLIN\u{00ae} 25\u{00b0}C \n  powder\u{2122}"),
            "ETHYL VANILLIN 25C powder"
        );
        assert_eq!(clean_text("Caf\u{00e9}\u{00a0}Aroma"), "CafAroma");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        let samples = [
            "  Ã‚Â° ODOUR\tMASK   \u{00c2}\u{00b0}  base ",
            "plain text",
            "\u{2122}\u{00ae}",
            "line one\nline two\r\nline three",
        ];
        for sample in samples {
            let once = clean_text(sample);
            assert_eq!(clean_text(&once), once);
        }
    }

    #[test]
    fn test_strip_uppercase_words() {
        assert_eq!(
            strip_uppercase_words("COMMERCIAL BANK OF CEYLON PLC\nNo 21 , Sir Razik Fareed Mawatha"),
            "No 21, Sir Razik Fareed Mawatha"
        );
    }

    #[test]
    fn test_clean_order_id() {
        assert_eq!(clean_order_id("SO-2231-"), "SO-2231");
        assert_eq!(clean_order_id(" 40012. "), "40012");
        assert_eq!(clean_order_id("-"), "");
    }
}
