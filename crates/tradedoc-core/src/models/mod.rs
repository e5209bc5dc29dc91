//! Data models for trade-document extraction.

pub mod config;
pub mod field;
pub mod format;
pub mod record;

pub use config::TradeDocConfig;
pub use field::{Field, FieldCategory};
pub use format::FormatTag;
pub use record::FieldRecord;
