use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{Difficulty, TargetChart};
use crate::config::{levels, master_columns as col};
use crate::parse::{parse_float_or_unset, parse_int, split_csv_line};

/// One row of the chart master table, numbers already coerced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterChart {
    pub version_full: String,
    pub title: String,
    pub genre: String,
    pub artist: String,
    pub version: i64,
    /// Raw difficulty tag; the master also lists DP charts
    pub difficulty: String,
    pub level: i64,
    pub notes: i64,
    /// -1 when unknown
    pub bpm: f64,
    pub bpm_min: f64,
    pub bpm_max: f64,
    pub measure: i64,
    pub duration: i64,
    pub kaiden_average: i64,
    pub top_score: i64,
}

impl MasterChart {
    fn from_columns(cols: &[String]) -> Option<Self> {
        if cols.len() < col::MIN_COLUMNS {
            return None;
        }

        let int = |i: usize| parse_int(&cols[i]).unwrap_or(0);
        let float = |i: usize| parse_float_or_unset(&cols[i]);

        Some(Self {
            version_full: cols[col::VERSION_FULL].clone(),
            title: cols[col::TITLE].clone(),
            genre: cols[col::GENRE].clone(),
            artist: cols[col::ARTIST].clone(),
            version: int(col::VERSION),
            difficulty: cols[col::DIFFICULTY].clone(),
            level: int(col::LEVEL),
            notes: int(col::NOTES),
            bpm: float(col::BPM),
            bpm_min: float(col::BPM_MIN),
            bpm_max: float(col::BPM_MAX),
            measure: int(col::MEASURE),
            duration: int(col::DURATION),
            kaiden_average: int(col::KAIDEN_AVERAGE),
            top_score: int(col::TOP_SCORE),
        })
    }

    /// Convert to a playable SP chart.
    ///
    /// Returns `None` for non-SP tags, charts without notes and levels outside 1..=12.
    pub fn to_target(&self) -> Option<TargetChart> {
        let difficulty = Difficulty::from_tag(&self.difficulty)?;
        let notes = u32::try_from(self.notes).ok().filter(|&n| n > 0)?;
        let level = u8::try_from(self.level)
            .ok()
            .filter(|&l| levels::is_valid(l))?;

        Some(TargetChart {
            title: self.title.clone(),
            difficulty,
            level,
            notes,
            kaiden_average: positive_score(self.kaiden_average),
            top_score: positive_score(self.top_score),
        })
    }
}

/// Zero or negative reference scores are treated as absent
fn positive_score(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|&v| v > 0)
}

/// Parse the raw master table.
///
/// The header row is skipped, blank lines are ignored and rows with fewer
/// than 16 columns are dropped.
pub fn load_catalog(raw: &str) -> Vec<MasterChart> {
    let mut charts = Vec::new();
    let mut dropped = 0usize;

    for line in raw.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match MasterChart::from_columns(&split_csv_line(line)) {
            Some(chart) => charts.push(chart),
            None => dropped += 1,
        }
    }

    debug!(
        "Parsed {} master rows ({} short rows dropped)",
        charts.len(),
        dropped
    );
    charts
}

/// Restrict the catalog to playable single-play charts
pub fn filter_playable_sp_charts(catalog: &[MasterChart]) -> Vec<TargetChart> {
    catalog.iter().filter_map(MasterChart::to_target).collect()
}

/// Sorted, deduplicated chart titles
pub fn list_unique_titles(charts: &[TargetChart]) -> Vec<String> {
    charts
        .iter()
        .map(|c| c.title.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
