#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockbrief/stockbrief/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod document;
pub mod export;
pub mod report;

pub use document::{
    DocumentFormat, DocumentSink, HeadingLevel, HtmlDocument, MarkdownDocument, TextDocument,
};
pub use export::{ExportError, ExportFormat, Exporter};
pub use report::{
    EARNINGS_SECTION, Report, ReportBuilder, ReportError, ReportSection, report_file_name,
    report_file_stem,
};
