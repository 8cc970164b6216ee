//! Integration tests for report rendering and saving.

use chrono::NaiveDate;
use stockbrief_data::{FieldMap, YearlyEarnings};
use stockbrief_fields::{StockRecord, earnings_growth};
use stockbrief_output::{DocumentFormat, ExportFormat, Exporter, ReportBuilder};

fn kbwy_record() -> StockRecord {
    let fields = FieldMap::new()
        .with("longName", "Invesco KBW Premium Yield Equity REIT ETF")
        .with("symbol", "KBWY")
        .with("longBusinessSummary", "The Fund will invest at least 90% of its total assets in REITs.")
        .with("currentPrice", 22.31)
        .with("volume", 118_245)
        .with("averageVolume", 190_512)
        .with("yield", 0.0783)
        .with("52WeekChange", -0.0412)
        .with("SandP52WeekChange", 0.0)
        .with("beta", 0);
    StockRecord::extract(&fields)
}

fn april_11() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 4, 11).unwrap()
}

#[test]
fn test_full_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let report = ReportBuilder::new()
        .record(kbwy_record())
        .symbol("kbwy")
        .date(april_11())
        .build()
        .unwrap();

    let mut document = DocumentFormat::Text.create_document();
    let path = report.save(document.as_mut(), dir.path()).unwrap();

    assert_eq!(path, dir.path().join("KBWY(11-04-22).txt"));
    let text = std::fs::read_to_string(&path).unwrap();

    assert!(text.starts_with("Invesco KBW Premium Yield Equity REIT ETF (KBWY)\n===="));
    assert!(text.contains("Volume\n~~~~~~\n118,245\n"));
    assert!(text.contains("Average Volume\n~~~~~~~~~~~~~~\n190,512\n"));
    assert!(text.contains("Current Price\n~~~~~~~~~~~~~\n22.31\n"));
    assert!(text.contains("Dividend Yield\n~~~~~~~~~~~~~~\n7.83%\n"));
    assert!(text.contains("52 Week Change\n~~~~~~~~~~~~~~\n-4.12%\n"));
    // Zero collapses to absent.
    assert!(text.contains("S&P 500 52 Week Change\n~~~~~~~~~~~~~~~~~~~~~~\nNone\n"));
    assert!(text.contains("Beta\n~~~~\nNone\n"));
    assert!(text.contains("Industry\n~~~~~~~~\nNone\n"));
}

#[test]
fn test_same_day_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let build = || {
        ReportBuilder::new()
            .record(kbwy_record())
            .date(april_11())
            .build()
            .unwrap()
    };

    let first = build()
        .save(DocumentFormat::Markdown.create_document().as_mut(), dir.path())
        .unwrap();
    let second = build()
        .save(DocumentFormat::Markdown.create_document().as_mut(), dir.path())
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_html_report_with_earnings_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let growth = earnings_growth(&[
        YearlyEarnings::new(2019, 100.0),
        YearlyEarnings::new(2020, -50.0),
        YearlyEarnings::new(2021, 75.0),
        YearlyEarnings::new(2022, 150.0),
    ]);
    let report = ReportBuilder::new()
        .record(kbwy_record())
        .date(april_11())
        .earnings(growth)
        .build()
        .unwrap();

    let path = report
        .save(DocumentFormat::Html.create_document().as_mut(), dir.path())
        .unwrap();
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<h2>Earnings Growth</h2>"));
    assert!(html.contains("<p><u>Growth since 2020</u><br>400.00%</p>"));

    let csv_path = dir.path().join(report.file_name(ExportFormat::Csv.extension()));
    report.export_to_file(&csv_path, ExportFormat::Csv).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains("Earnings Growth,Growth since 2019,50.00%"));
}
