//! Aggregate command for analyzing a play history export.

use anyhow::{Context, Result};
use kaiden_core::export::{
    Report, export_report_json, format_result_console, format_summary_console,
    generate_report_json, generate_results_tsv,
};
use kaiden_core::parse::decode_text;
use kaiden_core::{AggregateRequest, Analyzer, FileSource};

use crate::cli::OutputFormat;
use crate::cli_utils;

pub fn run(
    analyzer: &Analyzer<FileSource>,
    csv_path: &str,
    level: Option<u8>,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<()> {
    let bytes =
        std::fs::read(csv_path).with_context(|| format!("Failed to read CSV: {}", csv_path))?;
    let csv = decode_text(&bytes).with_context(|| format!("Failed to decode CSV: {}", csv_path))?;

    let mut request = AggregateRequest::new(csv);
    request.level_filter = level.map(i64::from);
    if level.is_some() && request.effective_level().is_none() {
        eprintln!("Ignoring level filter outside 1-12");
    }

    let response = analyzer
        .aggregate(&request)
        .context("Failed to aggregate play history")?;
    eprintln!(
        "Aggregated {} charts ({} played)",
        response.summary.total_charts, response.summary.played_charts
    );

    let content = match format {
        OutputFormat::Console => {
            let mut lines: Vec<String> = response
                .results
                .iter()
                .filter(|r| r.is_played())
                .map(format_result_console)
                .collect();
            lines.push(format_summary_console(&response.summary));
            lines.join("\n")
        }
        OutputFormat::Tsv => generate_results_tsv(&response.results),
        OutputFormat::Json => {
            let report = Report::new(response, request.effective_level());
            if let Some(path) = output {
                export_report_json(path, &report)
                    .with_context(|| format!("Failed to write: {}", path))?;
                eprintln!("Exported to: {}", path);
                return Ok(());
            }
            generate_report_json(&report)?
        }
    };

    cli_utils::write_output(output, &content)
}
