//! Building blocks shared by the per-format extractors.

pub mod groups;
pub mod normalize;
pub mod patterns;

pub use groups::{find_bank_block, BankDetails, OrderReference};
pub use normalize::{
    clean_order_id, clean_text, is_numeric_token, normalize_numeric, strip_uppercase_words,
};

use regex::{Captures, Regex};

/// A candidate matcher in a fallback chain.
pub type Strategy<T> = fn(&str) -> Option<T>;

/// Run strategies in priority order; the first one that produces a value wins.
pub fn first_of<T>(text: &str, strategies: &[Strategy<T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(text))
}

/// Try patterns in priority order and return the captures of the first that matches.
pub fn first_captures<'t>(text: &'t str, patterns: &[&Regex]) -> Option<Captures<'t>> {
    patterns.iter().find_map(|pattern| pattern.captures(text))
}
