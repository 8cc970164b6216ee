#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockbrief/stockbrief/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod pipeline;

// Re-export main types from sub-crates
pub use stockbrief_data as data;
pub use stockbrief_fields as fields;
pub use stockbrief_output as output;

pub use fields::{Field, FieldValue, StockRecord};
pub use pipeline::{PipelineError, ReportOptions, ReportOutcome, ReportPipeline};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
