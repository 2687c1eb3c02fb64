//! Aggregation of a play history against the target charts.
//!
//! For every target chart the matching history entry is looked up by
//! (title, difficulty) and every derived metric is computed. Charts with a
//! positive score feed the running totals, the level buckets, the overall BPI
//! and the ability scores.

mod level_stats;
mod result;

pub use level_stats::*;
pub use result::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ability::calculate_ability_scores;
use crate::bpi::calculate_overall_bpi;
use crate::chart::TargetChart;
use crate::config::{BpiConfig, levels};
use crate::error::Result;
use crate::parse::parse_history;
use crate::score::HistoryMap;

/// Per-chart results (catalog order) plus the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub results: Vec<ScoreResult>,
    pub summary: ScoreSummary,
}

/// Parse a play history export and aggregate it against the target charts.
///
/// Fails only when the export itself is malformed.
pub fn aggregate(
    target_charts: &[TargetChart],
    history_csv: &str,
    bpi: &BpiConfig,
) -> Result<Aggregation> {
    let history = parse_history(history_csv)?;
    Ok(aggregate_history(target_charts, &history, bpi))
}

/// Aggregate an already parsed history
pub fn aggregate_history(
    target_charts: &[TargetChart],
    history: &HistoryMap,
    bpi: &BpiConfig,
) -> Aggregation {
    let mut stats: BTreeMap<u8, LevelStats> = (levels::MIN_LEVEL..=levels::MAX_LEVEL)
        .map(|level| (level, LevelStats::new(level)))
        .collect();
    for chart in target_charts {
        if let Some(s) = stats.get_mut(&chart.level) {
            s.total += 1;
        }
    }

    let mut results = Vec::with_capacity(target_charts.len());
    let mut bpi_values = Vec::new();
    let mut score_rates = Vec::new();
    let mut total_misses = 0u32;
    let mut total_rate = 0.0;
    let mut total_ex_score = 0u64;

    for chart in target_charts {
        let score = history.find(&chart.title, chart.difficulty);
        let result = ScoreResult::compute(chart, score, bpi.coefficient);

        if result.is_scored() {
            total_rate += result.score_rate;
            total_ex_score += u64::from(result.ex_score);
            score_rates.push(result.score_rate);
            total_misses = total_misses.saturating_add(result.miss_count.unwrap_or(0));
            if let Some(value) = result.bpi {
                bpi_values.push(value);
            }
            if let Some(s) = stats.get_mut(&chart.level) {
                s.record(result.score_rate, result.max_minus);
            }
        }

        results.push(result);
    }

    for s in stats.values_mut() {
        s.finalize();
    }

    let level_stats: Vec<LevelStats> = stats
        .into_values()
        .rev()
        .filter(|s| s.total > 0)
        .collect();

    let level_averages: BTreeMap<u8, f64> = level_stats
        .iter()
        .filter(|s| s.average_rate > 0.0)
        .map(|s| (s.level, s.average_rate))
        .collect();

    let played_charts = score_rates.len();
    let summary = ScoreSummary {
        total_charts: target_charts.len(),
        played_charts,
        average_score_rate: if played_charts > 0 {
            total_rate / played_charts as f64
        } else {
            0.0
        },
        average_bpi: calculate_overall_bpi(&bpi_values, bpi.min_bpi),
        total_ex_score,
        total_max_score: target_charts
            .iter()
            .map(TargetChart::max_ex_score)
            .sum(),
        level_stats,
        ability: calculate_ability_scores(&score_rates, &level_averages, total_misses),
    };

    debug!(
        "Aggregated {} charts ({} played, {} with BPI)",
        summary.total_charts,
        summary.played_charts,
        bpi_values.len()
    );

    Aggregation { results, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Difficulty;
    use crate::score::{ClearType, ParsedScore};

    fn target(title: &str, difficulty: Difficulty, level: u8, notes: u32) -> TargetChart {
        TargetChart {
            title: title.to_string(),
            difficulty,
            level,
            notes,
            kaiden_average: Some(notes * 2 * 85 / 100),
            top_score: Some(notes * 2 * 95 / 100),
        }
    }

    fn scored(title: &str, difficulty: Difficulty, ex_score: u32, misses: Option<u32>) -> ParsedScore {
        ParsedScore {
            ex_score,
            miss_count: misses,
            clear_type: ClearType::Clear,
            ..ParsedScore::no_play(title, difficulty)
        }
    }

    fn history(entries: Vec<ParsedScore>) -> HistoryMap {
        let mut map = HistoryMap::new();
        let mut by_title: BTreeMap<String, Vec<ParsedScore>> = BTreeMap::new();
        for entry in entries {
            by_title.entry(entry.title.clone()).or_default().push(entry);
        }
        for (title, scores) in by_title {
            map.insert(title, scores);
        }
        map
    }

    #[test]
    fn test_results_follow_catalog_order() {
        let charts = vec![
            target("B", Difficulty::SpA, 12, 1000),
            target("A", Difficulty::SpH, 10, 800),
        ];
        let agg = aggregate_history(&charts, &HistoryMap::new(), &BpiConfig::default());

        let titles: Vec<&str> = agg.results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_huge_note_count_is_summed_in_u64() {
        let charts = vec![TargetChart {
            title: "Huge".to_string(),
            difficulty: Difficulty::SpA,
            level: 12,
            notes: 3_000_000_000,
            kaiden_average: None,
            top_score: None,
        }];
        let agg = aggregate_history(
            &charts,
            &history(vec![scored("Huge", Difficulty::SpA, 1_000_000, Some(0))]),
            &BpiConfig::default(),
        );

        assert_eq!(agg.results[0].max_score, 6_000_000_000);
        assert_eq!(agg.summary.total_max_score, 6_000_000_000);
        assert_eq!(agg.summary.played_charts, 1);
    }

    #[test]
    fn test_empty_history_summary() {
        let charts = vec![target("A", Difficulty::SpA, 12, 1000)];
        let agg = aggregate_history(&charts, &HistoryMap::new(), &BpiConfig::default());
        let summary = &agg.summary;

        assert_eq!(summary.total_charts, 1);
        assert_eq!(summary.played_charts, 0);
        assert_eq!(summary.average_score_rate, 0.0);
        assert_eq!(summary.average_bpi, None);
        assert_eq!(summary.total_ex_score, 0);
        assert_eq!(summary.total_max_score, 2000);
        assert_eq!(summary.ability.single_note, 0.0);
        assert_eq!(summary.ability.jikara, 0.0);
    }

    #[test]
    fn test_level_stats_order_and_totals() {
        let charts = vec![
            target("A", Difficulty::SpN, 5, 500),
            target("A", Difficulty::SpA, 12, 1000),
            target("B", Difficulty::SpA, 12, 1100),
            target("C", Difficulty::SpH, 9, 900),
        ];
        let agg = aggregate_history(&charts, &HistoryMap::new(), &BpiConfig::default());

        let levels: Vec<(u8, u32)> = agg
            .summary
            .level_stats
            .iter()
            .map(|s| (s.level, s.total))
            .collect();
        assert_eq!(levels, vec![(12, 2), (9, 1), (5, 1)]);
    }

    #[test]
    fn test_match_uses_title_and_difficulty() {
        let charts = vec![
            target("A", Difficulty::SpH, 10, 1000),
            target("A", Difficulty::SpA, 12, 1000),
        ];
        let history = history(vec![scored("A", Difficulty::SpA, 1900, None)]);
        let agg = aggregate_history(&charts, &history, &BpiConfig::default());

        assert_eq!(agg.results[0].ex_score, 0);
        assert_eq!(agg.results[1].ex_score, 1900);
        assert_eq!(agg.summary.played_charts, 1);
    }

    #[test]
    fn test_totals_and_misses() {
        let charts = vec![
            target("A", Difficulty::SpA, 12, 1000),
            target("B", Difficulty::SpA, 12, 1000),
            target("C", Difficulty::SpA, 11, 1000),
        ];
        let history = history(vec![
            scored("A", Difficulty::SpA, 1800, Some(10)),
            scored("B", Difficulty::SpA, 1600, None),
            scored("C", Difficulty::SpA, 1900, Some(2)),
        ]);
        let agg = aggregate_history(&charts, &history, &BpiConfig::default());
        let summary = &agg.summary;

        assert_eq!(summary.played_charts, 3);
        assert_eq!(summary.total_ex_score, 5300);
        assert_eq!(summary.total_max_score, 6000);
        assert!((summary.average_score_rate - 5300.0 / 6000.0).abs() < 1e-12);
        assert!(summary.average_bpi.is_some());

        let lv12 = &summary.level_stats[0];
        assert_eq!(lv12.level, 12);
        assert_eq!(lv12.played, 2);
        assert!((lv12.average_rate - 0.85).abs() < 1e-12);

        // Ability uses the per-level averages and the 12 known misses
        let mut averages = BTreeMap::new();
        averages.insert(11, 0.95);
        averages.insert(12, 0.85);
        let expected = calculate_ability_scores(&[0.9, 0.8, 0.95], &averages, 12);
        assert!((summary.ability.jikara - expected.jikara).abs() < 1e-9);
        assert!((summary.ability.single_note - expected.single_note).abs() < 1e-9);
    }

    #[test]
    fn test_failed_zero_score_not_counted() {
        let charts = vec![target("A", Difficulty::SpA, 12, 1000)];
        let history = history(vec![ParsedScore {
            clear_type: ClearType::Failed,
            ..ParsedScore::no_play("A", Difficulty::SpA)
        }]);
        let agg = aggregate_history(&charts, &history, &BpiConfig::default());

        assert!(agg.results[0].is_played());
        assert_eq!(agg.summary.played_charts, 0);
        assert_eq!(agg.summary.level_stats[0].played, 0);
    }

    #[test]
    fn test_bpi_coefficient_is_applied() {
        let charts = vec![target("A", Difficulty::SpA, 12, 1000)];
        let history = history(vec![scored("A", Difficulty::SpA, 1800, None)]);

        let default = aggregate_history(&charts, &history, &BpiConfig::default());
        let steep = aggregate_history(
            &charts,
            &history,
            &BpiConfig {
                coefficient: 1.5,
                ..BpiConfig::default()
            },
        );

        assert_ne!(default.results[0].bpi, steep.results[0].bpi);
        assert_eq!(default.summary.average_bpi, default.results[0].bpi);
    }

    #[test]
    fn test_aggregate_rejects_bad_csv() {
        let charts = vec![target("A", Difficulty::SpA, 12, 1000)];
        assert!(aggregate(&charts, "", &BpiConfig::default()).is_err());
        assert!(aggregate(&charts, "title,score\n", &BpiConfig::default()).is_err());
    }
}
