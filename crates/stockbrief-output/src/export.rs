//! CSV and JSON export of formatted reports.

use crate::report::Report;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use stockbrief_fields::FormattedField;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8.
    #[error("Invalid UTF-8 in export: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for types that can be exported to various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// One CSV row of a report.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    symbol: &'a str,
    date: String,
    section: &'a str,
    label: &'a str,
    value: &'a str,
}

fn csv_string<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

impl Exporter for Report {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let date = self.date.format("%Y-%m-%d").to_string();
                csv_string(self.fields().map(|(section, field)| ReportRow {
                    symbol: &self.symbol,
                    date: date.clone(),
                    section,
                    label: &field.label,
                    value: &field.value,
                }))
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for [FormattedField] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_string(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockbrief_fields::{Field, StockRecord};

    fn report() -> Report {
        let record = StockRecord::empty()
            .with(Field::Name, "Apple Inc.")
            .with(Field::Symbol, "AAPL")
            .with(Field::MarketCap, 2_500_000_000_000_i64)
            .with(Field::Beta, 1.2);
        Report::new(&record, "aapl", NaiveDate::from_ymd_opt(2022, 4, 11).unwrap())
    }

    #[test]
    fn test_report_export_csv() {
        let csv = report().export_to_string(ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("symbol,date,section,label,value"));
        assert!(csv.contains("AAPL,2022-04-11,Technical Information,Market Cap,\"2,500,000,000,000\""));
        assert!(csv.contains("AAPL,2022-04-11,Technical Information,Beta,1.20"));
        assert_eq!(csv.lines().count(), 16);
    }

    #[test]
    fn test_report_export_json() {
        let json = report().export_to_string(ExportFormat::Json).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report());
        assert!(json.contains("\"2022-04-11\""));
    }

    #[test]
    fn test_report_export_pretty_json() {
        let json = report().export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(json.contains("\"title\": \"Apple Inc. (AAPL)\""));
        assert!(json.contains("  ")); // Indentation indicates pretty format
    }

    #[test]
    fn test_formatted_fields_csv() {
        let fields = vec![
            FormattedField::new("Beta", "1.20"),
            FormattedField::new("Dividend Yield", "None"),
        ];
        let csv = fields.export_to_string(ExportFormat::Csv).unwrap();
        assert_eq!(csv, "label,value\nBeta,1.20\nDividend Yield,None\n");
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AAPL(11-04-22).json");

        report()
            .export_to_file(&path, ExportFormat::Json)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Apple Inc."));
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }
}
