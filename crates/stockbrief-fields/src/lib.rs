#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockbrief/stockbrief/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod earnings;
pub mod field;
pub mod format;
pub mod record;
pub mod value;

pub use earnings::{EarningsGrowth, earnings_growth, growth_between};
pub use field::{Field, Section};
pub use format::{
    ABSENT_DISPLAY, FormattedField, format_field, format_percentage, format_record, format_value,
    group_thousands,
};
pub use record::{StockRecord, extract};
pub use value::FieldValue;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
