//! Scan command - extract email addresses from a single PDF file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use pdfmail_core::models::config::{LineTerminator, PdfmailConfig, SortOrder};
use pdfmail_core::pipeline::{scan, ScanOutcome, ScanReport};
use pdfmail_core::{PdfError, PdfmailError};

use super::config::load_config;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file or directory (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Sort addresses alphabetically instead of by first appearance
    #[arg(long)]
    sort: bool,

    /// End CSV lines with CRLF
    #[arg(long)]
    crlf: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV with a single "Email Addresses" column
    Csv,
    /// JSON scan report
    Json,
    /// Plain text list
    Text,
}

pub fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if args.sort {
        config.export.order = SortOrder::Alphabetical;
    }
    if args.crlf {
        config.export.line_terminator = LineTerminator::Crlf;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let mut report = scan_with_spinner(&data, &config).map_err(|e| match e {
        PdfmailError::Pdf(ref pdf) if pdf.is_parse_error() => anyhow::anyhow!(
            "{} is not a readable PDF ({}). Please upload a different file.",
            args.input.display(),
            pdf
        ),
        other => other.into(),
    })?;

    debug!(
        "{} pages, per-page matches {:?}, {}ms",
        report.page_count, report.page_matches, report.processing_time_ms
    );

    // Every output format lists addresses in the configured row order
    if config.export.order == SortOrder::Alphabetical {
        report.emails = report.emails.sorted().into_iter().collect();
    }

    if report.outcome() == ScanOutcome::NoMatches {
        eprintln!(
            "{} No email addresses were found in the PDF.",
            style("⚠").yellow()
        );
        // The JSON report is written even when empty
        if matches!(args.format, OutputFormat::Json) {
            let output = format_report(&report, args.format)?;
            write_output(&output, args.output.as_deref(), &config)?;
        }
        return Ok(());
    }

    eprintln!(
        "{} Found {} email(s).",
        style("✓").green(),
        report.emails.len()
    );

    let output = format_report(&report, args.format)?;
    write_output(&output, args.output.as_deref(), &config)
}

fn write_output(output: &str, target: Option<&Path>, config: &PdfmailConfig) -> anyhow::Result<()> {
    if let Some(output_path) = target {
        let path = resolve_output_path(output_path, config);
        fs::write(&path, output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn scan_with_spinner(data: &[u8], config: &PdfmailConfig) -> pdfmail_core::Result<ScanReport> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Processing the PDF... Please wait.");

    let result = scan(data, config);

    match &result {
        Ok(_) => pb.finish_and_clear(),
        Err(PdfmailError::Pdf(PdfError::Encrypted)) => pb.abandon_with_message("PDF is encrypted"),
        Err(_) => pb.abandon_with_message("Failed"),
    }
    result
}

/// A directory target receives the configured download file name.
fn resolve_output_path(output: &Path, config: &PdfmailConfig) -> PathBuf {
    if output.is_dir() {
        output.join(&config.export.file_name)
    } else {
        output.to_path_buf()
    }
}

fn format_report(report: &ScanReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Csv => report
            .csv()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("No CSV produced for a non-empty result")),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_text(report: &ScanReport) -> String {
    let mut output = String::from("Extracted Email Addresses:\n");
    for email in &report.emails {
        output.push_str(&format!("  {}\n", email));
    }
    output
}
