use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::{ScoreResult, ScoreSummary};
use crate::chart::TargetChart;
use crate::config::levels;

/// Aggregation request as sent by a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRequest {
    #[serde(default)]
    pub csv: String,
    /// Restrict to one level; ignored unless in 1..=12
    #[serde(default)]
    pub level_filter: Option<i64>,
}

impl AggregateRequest {
    pub fn new(csv: impl Into<String>) -> Self {
        Self {
            csv: csv.into(),
            level_filter: None,
        }
    }

    pub fn with_level_filter(mut self, level: i64) -> Self {
        self.level_filter = Some(level);
        self
    }

    /// The level filter if it names a valid level
    pub fn effective_level(&self) -> Option<u8> {
        self.level_filter
            .and_then(|l| u8::try_from(l).ok())
            .filter(|&l| levels::is_valid(l))
    }
}

/// Successful aggregation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResponse {
    pub results: Vec<ScoreResult>,
    pub summary: ScoreSummary,
}

/// Error payload returned instead of a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

/// Wire shape of an aggregation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Ok(AggregateResponse),
    Error(ErrorPayload),
}

/// Catalog size overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_charts: usize,
    pub level_counts: BTreeMap<u8, usize>,
}

impl CatalogSummary {
    pub fn from_charts(charts: &[TargetChart]) -> Self {
        let mut level_counts = BTreeMap::new();
        for chart in charts {
            *level_counts.entry(chart.level).or_insert(0) += 1;
        }
        Self {
            total_charts: charts.len(),
            level_counts,
        }
    }
}

/// Sort by score rate (best first); charts without a score go last.
///
/// The sort is stable, so ties keep catalog order.
pub fn sort_results(results: &mut [ScoreResult]) {
    results.sort_by(|a, b| match (a.ex_score == 0, b.ex_score == 0) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => b.score_rate.total_cmp(&a.score_rate),
    });
}
