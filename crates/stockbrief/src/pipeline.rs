//! End-to-end report generation: fetch, extract, format, write.

use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use stockbrief_data::{DataError, FieldSource};
use stockbrief_fields::{EarningsGrowth, StockRecord, earnings_growth};
use stockbrief_output::{DocumentFormat, ExportError, ExportFormat, Exporter, ReportBuilder, ReportError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Data source error
    #[error(transparent)]
    Data(#[from] DataError),

    /// Document error
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// What to write and where.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Document format.
    pub format: DocumentFormat,
    /// Additional export written beside the document.
    pub export: Option<ExportFormat>,
    /// Append the earnings growth section to the document.
    pub include_earnings: bool,
    /// Directory receiving the output files.
    pub output_dir: PathBuf,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Text,
            export: None,
            include_earnings: false,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// The extracted record.
    pub record: StockRecord,
    /// Earnings growth against the latest year, oldest baseline first.
    pub earnings: Vec<EarningsGrowth>,
    /// Path of the written document.
    pub document_path: PathBuf,
    /// Path of the export, if one was requested.
    pub export_path: Option<PathBuf>,
}

/// Fetches a symbol from a [`FieldSource`] and writes its report.
#[derive(Debug)]
pub struct ReportPipeline<S> {
    source: S,
    options: ReportOptions,
}

impl<S: FieldSource> ReportPipeline<S> {
    /// Create a pipeline over `source`.
    pub const fn new(source: S, options: ReportOptions) -> Self {
        Self { source, options }
    }

    /// Active options.
    pub const fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Produce the report for `symbol`, dated today.
    ///
    /// # Errors
    ///
    /// Fails when the source cannot resolve the symbol or an output file
    /// cannot be written.
    pub async fn run(&self, symbol: &str) -> Result<ReportOutcome, PipelineError> {
        self.run_on(symbol, Local::now().date_naive()).await
    }

    /// Produce the report for `symbol` with an explicit report date.
    ///
    /// # Errors
    ///
    /// Fails when the source cannot resolve the symbol or an output file
    /// cannot be written.
    pub async fn run_on(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<ReportOutcome, PipelineError> {
        debug!(source = self.source.name(), symbol, "Fetching quote summary");
        let summary = self.source.fetch_summary(symbol).await?;

        let record = StockRecord::extract(&summary.fields);
        debug!(absent = record.absent_count(), "Extracted stock record");

        let earnings = earnings_growth(&summary.yearly_earnings);

        let mut builder = ReportBuilder::new()
            .record(record.clone())
            .symbol(summary.symbol.as_str())
            .date(date);
        if self.options.include_earnings {
            builder = builder.earnings(earnings.clone());
        }
        let report = builder.build()?;

        let mut document = self.options.format.create_document();
        let document_path = report.save(document.as_mut(), &self.options.output_dir)?;

        let export_path = match self.options.export {
            Some(format) => {
                let path = report.output_path(&self.options.output_dir, format.extension())?;
                report.export_to_file(&path, format)?;
                info!(path = %path.display(), "Export written");
                Some(path)
            }
            None => None,
        };

        Ok(ReportOutcome {
            record,
            earnings,
            document_path,
            export_path,
        })
    }
}
