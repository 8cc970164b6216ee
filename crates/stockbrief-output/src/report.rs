//! Report generation for stockbrief.

use crate::document::{DocumentSink, HeadingLevel};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stockbrief_data::validate_symbol;
use stockbrief_fields::{
    EarningsGrowth, Field, FormattedField, Section, StockRecord, format_field,
};
use thiserror::Error;
use tracing::info;

/// Heading of the optional earnings section.
pub const EARNINGS_SECTION: &str = "Earnings Growth";

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The builder was not given a stock record.
    #[error("Report requires a stock record")]
    MissingRecord,

    /// Unrecognized document format name.
    #[error("Unknown document format: {0}")]
    UnknownFormat(String),

    /// The report symbol cannot be used in a file name.
    #[error("Invalid report symbol: {0:?}")]
    InvalidSymbol(String),
}

/// File name stem for a report: `SYMBOL(DD-MM-YY)`.
///
/// ```
/// use chrono::NaiveDate;
/// use stockbrief_output::report_file_stem;
///
/// let date = NaiveDate::from_ymd_opt(2022, 4, 11).unwrap();
/// assert_eq!(report_file_stem("kbwy", date), "kbwy(11-04-22)");
/// ```
pub fn report_file_stem(symbol: &str, date: NaiveDate) -> String {
    format!("{symbol}({})", date.format("%d-%m-%y"))
}

/// Full file name for a report with the given extension.
pub fn report_file_name(symbol: &str, date: NaiveDate, extension: &str) -> String {
    format!("{}.{extension}", report_file_stem(symbol, date))
}

/// A titled group of formatted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section sub-heading.
    pub heading: String,

    /// Fields in display order.
    pub fields: Vec<FormattedField>,
}

/// A formatted stock report, ready to render into a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Symbol used for the title and file name.
    pub symbol: String,

    /// Report date.
    pub date: NaiveDate,

    /// Title heading.
    pub title: String,

    /// Sections in display order.
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Build the standard report for `record`.
    ///
    /// The record's own symbol is preferred; `requested_symbol` is used when
    /// the source did not return one or returned one that is not a valid
    /// ticker.
    pub fn new(record: &StockRecord, requested_symbol: &str, date: NaiveDate) -> Self {
        let symbol = record
            .symbol()
            .and_then(|s| validate_symbol(s).ok())
            .unwrap_or_else(|| requested_symbol.trim().to_string());
        let title = format!("{} ({symbol})", format_field(record, Field::Name).value);

        let sections = [Section::General, Section::Technical]
            .into_iter()
            .filter_map(|section| {
                Some(ReportSection {
                    heading: section.heading()?.to_string(),
                    fields: Field::in_section(section)
                        .map(|field| format_field(record, field))
                        .collect(),
                })
            })
            .collect();

        Self {
            symbol,
            date,
            title,
            sections,
        }
    }

    /// Append an earnings growth section. Empty input leaves the report unchanged.
    pub fn with_earnings(mut self, growth: &[EarningsGrowth]) -> Self {
        if !growth.is_empty() {
            self.sections.push(ReportSection {
                heading: EARNINGS_SECTION.to_string(),
                fields: growth
                    .iter()
                    .map(|g| FormattedField::new(format!("Growth since {}", g.since_year), g.display()))
                    .collect(),
            });
        }
        self
    }

    /// File name stem, e.g. `AAPL(11-04-22)`.
    pub fn file_stem(&self) -> String {
        report_file_stem(&self.symbol, self.date)
    }

    /// File name with `extension`.
    pub fn file_name(&self, extension: &str) -> String {
        report_file_name(&self.symbol, self.date, extension)
    }

    /// Path of the report file with `extension` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidSymbol`] if the symbol is not a valid
    /// ticker, so the file always lands directly in `dir`.
    pub fn output_path(&self, dir: &Path, extension: &str) -> Result<PathBuf, ReportError> {
        validate_symbol(&self.symbol).map_err(|_| ReportError::InvalidSymbol(self.symbol.clone()))?;
        Ok(dir.join(self.file_name(extension)))
    }

    /// All fields across sections, in display order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FormattedField)> {
        self.sections.iter().flat_map(|section| {
            section
                .fields
                .iter()
                .map(move |field| (section.heading.as_str(), field))
        })
    }

    /// Emit the title, section headings and one paragraph per field.
    pub fn render(&self, sink: &mut dyn DocumentSink) {
        sink.add_heading(&self.title, HeadingLevel::Title);
        for section in &self.sections {
            sink.add_heading(&section.heading, HeadingLevel::Section);
            for field in &section.fields {
                sink.add_labeled_paragraph(&field.label, &field.value);
            }
        }
    }

    /// Render into `sink` and save it in `dir`, returning the written path.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is unusable as a file name or the
    /// document cannot be written.
    pub fn save(&self, sink: &mut dyn DocumentSink, dir: &Path) -> Result<PathBuf, ReportError> {
        let path = self.output_path(dir, sink.extension())?;
        self.render(sink);
        sink.save(&path)?;
        info!(path = %path.display(), "Report written");
        Ok(path)
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    record: Option<StockRecord>,
    symbol: Option<String>,
    date: Option<NaiveDate>,
    earnings: Vec<EarningsGrowth>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stock record.
    pub fn record(mut self, record: StockRecord) -> Self {
        self.record = Some(record);
        self
    }

    /// Set the requested symbol, used when the record carries none.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the report date. Defaults to today's local date.
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Include an earnings growth section.
    pub fn earnings(mut self, earnings: Vec<EarningsGrowth>) -> Self {
        self.earnings = earnings;
        self
    }

    /// Build the report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingRecord`] if no record was set.
    pub fn build(self) -> Result<Report, ReportError> {
        let record = self.record.ok_or(ReportError::MissingRecord)?;
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let symbol = self.symbol.unwrap_or_default();
        Ok(Report::new(&record, &symbol, date).with_earnings(&self.earnings))
    }
}
