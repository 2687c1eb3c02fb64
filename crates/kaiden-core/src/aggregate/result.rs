use serde::{Deserialize, Serialize};

use crate::ability::AbilityScores;
use crate::aggregate::LevelStats;
use crate::bpi::{BpiParams, calculate_bpi};
use crate::chart::{Difficulty, TargetChart};
use crate::score::{ClearType, DjLevel, ParsedScore, max_minus, score_rate};

/// One catalog chart joined with the player's score and every derived metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub title: String,
    pub difficulty: Difficulty,
    pub level: u8,
    pub notes: u32,
    pub ex_score: u32,
    pub max_score: u64,
    pub score_rate: f64,
    pub dj_level: DjLevel,
    pub clear_type: ClearType,
    pub max_minus: i64,
    pub pgreat: u32,
    pub great: u32,
    pub miss_count: Option<u32>,
    pub bpi: Option<f64>,
    pub kaiden_average: Option<u32>,
    pub top_score: Option<u32>,
    /// EX score minus kaiden average, for positive scores only
    pub kaiden_diff: Option<i64>,
    /// EX score minus top score, for positive scores only
    pub top_diff: Option<i64>,
}

impl ScoreResult {
    /// Derive all metrics for a chart. A missing score is treated as NO PLAY.
    pub fn compute(chart: &TargetChart, score: Option<&ParsedScore>, bpi_coefficient: f64) -> Self {
        let ex_score = score.map_or(0, |s| s.ex_score);
        let rate = score_rate(ex_score, chart.notes);
        let has_score = ex_score > 0;

        let dj_level = if has_score {
            DjLevel::from_score_rate(rate)
        } else {
            DjLevel::F
        };

        let bpi = match (chart.kaiden_average, chart.top_score) {
            (Some(kaiden), Some(top)) if has_score => calculate_bpi(
                &BpiParams::new(
                    i64::from(ex_score),
                    i64::from(kaiden),
                    i64::from(top),
                    i64::from(chart.notes),
                )
                .with_coefficient(bpi_coefficient),
            ),
            _ => None,
        };

        let diff_to = |anchor: Option<u32>| {
            anchor
                .filter(|_| has_score)
                .map(|a| i64::from(ex_score) - i64::from(a))
        };

        Self {
            title: chart.title.clone(),
            difficulty: chart.difficulty,
            level: chart.level,
            notes: chart.notes,
            ex_score,
            max_score: chart.max_ex_score(),
            score_rate: rate,
            dj_level,
            clear_type: score.map_or(ClearType::NoPlay, |s| s.clear_type),
            max_minus: max_minus(ex_score, chart.notes),
            pgreat: score.map_or(0, |s| s.pgreat),
            great: score.map_or(0, |s| s.great),
            miss_count: score.and_then(|s| s.miss_count),
            bpi,
            kaiden_average: chart.kaiden_average,
            top_score: chart.top_score,
            kaiden_diff: diff_to(chart.kaiden_average),
            top_diff: diff_to(chart.top_score),
        }
    }

    /// Played: a positive score or any clear type other than NO PLAY
    pub fn is_played(&self) -> bool {
        self.ex_score > 0 || self.clear_type != ClearType::NoPlay
    }

    /// Played with a positive score; only these feed the statistics
    pub fn is_scored(&self) -> bool {
        self.is_played() && self.ex_score > 0
    }
}

/// Aggregate statistics over all target charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub total_charts: usize,
    pub played_charts: usize,
    pub average_score_rate: f64,
    pub average_bpi: Option<f64>,
    pub total_ex_score: u64,
    pub total_max_score: u64,
    /// Levels with at least one target chart, from 12 down to 1
    pub level_stats: Vec<LevelStats>,
    pub ability: AbilityScores,
}
