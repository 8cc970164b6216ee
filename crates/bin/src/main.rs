//! stockbrief CLI binary.
//!
//! Fetches one stock from Yahoo Finance and writes its report.

mod logging;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use stockbrief::data::{YahooConfig, YahooInfoProvider, validate_symbol};
use stockbrief::output::{DocumentFormat, ExportFormat};
use stockbrief::{ReportOptions, ReportPipeline};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "stockbrief")]
#[command(about = "Write a one-page brief of a stock's key metrics", long_about = None)]
#[command(version)]
struct Cli {
    /// Stock symbol (prompted for when omitted)
    symbol: Option<String>,

    /// Directory to write the report into
    #[arg(short, long, env = "STOCKBRIEF_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Document format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Txt)]
    format: FormatArg,

    /// Also export the report data
    #[arg(long, value_enum)]
    export: Option<ExportArg>,

    /// Print earnings growth and add it to the report
    #[arg(long)]
    earnings: bool,

    /// User agent for Yahoo Finance requests
    #[arg(long, env = "STOCKBRIEF_USER_AGENT")]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Txt,
    Md,
    Html,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Txt => Self::Text,
            FormatArg::Md => Self::Markdown,
            FormatArg::Html => Self::Html,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportArg {
    Csv,
    Json,
    PrettyJson,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Csv => Self::Csv,
            ExportArg::Json => Self::Json,
            ExportArg::PrettyJson => Self::PrettyJson,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    debug!("Command line input recorded: {cli:?}");

    let symbol = cli.symbol.as_deref().map_or_else(
        || prompt_symbol(io::stdin().lock(), io::stdout()),
        |symbol| Ok(validate_symbol(symbol)?),
    )?;

    let mut config = YahooConfig::default().timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(user_agent) = &cli.user_agent {
        config = config.user_agent(user_agent.as_str());
    }
    let provider = YahooInfoProvider::with_config(config)?;

    let options = ReportOptions {
        format: cli.format.into(),
        export: cli.export.map(Into::into),
        include_earnings: cli.earnings,
        output_dir: cli.output_dir.clone(),
    };
    let pipeline = ReportPipeline::new(provider, options);

    let pb = if cli.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Fetching {symbol}..."));

    let outcome = match pipeline.run(&symbol).await {
        Ok(outcome) => {
            pb.finish_and_clear();
            outcome
        }
        Err(e) => {
            pb.finish_with_message("Failed!");
            return Err(e.into());
        }
    };

    if cli.earnings {
        if outcome.earnings.is_empty() {
            println!("No yearly earnings available for {symbol}");
        }
        for growth in &outcome.earnings {
            println!(
                "Earnings growth since {}: {}",
                growth.since_year,
                growth.display()
            );
        }
    }

    println!("Report written to {}", outcome.document_path.display());
    if let Some(path) = &outcome.export_path {
        println!("Export written to {}", path.display());
    }

    Ok(())
}

/// Ask for a symbol on `output` and read one line from `input`.
fn prompt_symbol(
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<String, Box<dyn std::error::Error>> {
    write!(output, "Enter stock symbol: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(validate_symbol(&line)?)
}
