//! Export formats for aggregation results.

mod console;

pub use console::*;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::{ScoreResult, ScoreSummary};
use crate::analyzer::AggregateResponse;
use crate::error::Result;
use crate::score::{format_bpi, format_score_rate};

pub fn format_results_tsv_header() -> String {
    [
        "title",
        "difficulty",
        "level",
        "notes",
        "exscore",
        "maxscore",
        "rate",
        "djlevel",
        "lamp",
        "maxminus",
        "misscount",
        "bpi",
        "kaidenavg",
        "topscore",
    ]
    .join("\t")
}

pub fn format_results_tsv_row(result: &ScoreResult) -> String {
    let optional = |value: Option<u32>| value.map_or_else(|| "-".to_string(), |v| v.to_string());

    let values: Vec<String> = vec![
        result.title.clone(),
        result.difficulty.short_name().to_string(),
        result.level.to_string(),
        result.notes.to_string(),
        result.ex_score.to_string(),
        result.max_score.to_string(),
        format_score_rate(result.score_rate),
        result.dj_level.short_name().to_string(),
        result.clear_type.short_name().to_string(),
        result.max_minus.to_string(),
        optional(result.miss_count),
        format_bpi(result.bpi),
        optional(result.kaiden_average),
        optional(result.top_score),
    ];

    values.join("\t")
}

/// Header plus one row per result, newline separated
pub fn generate_results_tsv(results: &[ScoreResult]) -> String {
    let mut lines = vec![format_results_tsv_header()];
    lines.extend(results.iter().map(format_results_tsv_row));
    lines.join("\n")
}

/// Aggregation snapshot written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub level_filter: Option<u8>,
    pub summary: ScoreSummary,
    pub results: Vec<ScoreResult>,
}

impl Report {
    pub fn new(response: AggregateResponse, level_filter: Option<u8>) -> Self {
        Self {
            generated_at: Utc::now(),
            level_filter,
            summary: response.summary,
            results: response.results,
        }
    }
}

/// Pretty-printed JSON of a report
pub fn generate_report_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn export_report_json<P: AsRef<Path>>(path: P, report: &Report) -> Result<()> {
    fs::write(path, generate_report_json(report)?)?;
    Ok(())
}
