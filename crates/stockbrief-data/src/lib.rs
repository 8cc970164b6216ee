#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockbrief/stockbrief/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod source;
pub mod yahoo;

pub use error::{DataError, Result};
pub use source::{
    FieldMap, FieldSource, QuoteSummary, StaticFieldSource, YearlyEarnings, validate_symbol,
};
pub use yahoo::{YahooConfig, YahooInfoProvider};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
