//! Integration tests for kaiden-core
//!
//! These tests run the full pipeline: master table, history export,
//! aggregation and export.

use kaiden_core::aggregate::aggregate;
use kaiden_core::analyzer::{AggregateRequest, Analyzer, ApiResponse, FileSource, InlineSource};
use kaiden_core::chart::{Difficulty, MasterCatalog, filter_playable_sp_charts, load_catalog};
use kaiden_core::config::{BpiConfig, Config};
use kaiden_core::export::{Report, generate_report_json, generate_results_tsv};
use kaiden_core::score::{ClearType, DjLevel};

const MASTER_HEADER: &str = "version-full,title,genre,artist,version,difficulty,unused,level,notes,bpm,bpm-min,bpm-max,measure,duration,kaiden-average,top-score";

const HISTORY_HEADER: &str = "バージョン,タイトル,ジャンル,アーティスト,プレー回数,BEGINNER 難易度,BEGINNER スコア,BEGINNER PGreat,BEGINNER Great,BEGINNER ミスカウント,BEGINNER クリアタイプ,BEGINNER DJ LEVEL,NORMAL 難易度,NORMAL スコア,NORMAL PGreat,NORMAL Great,NORMAL ミスカウント,NORMAL クリアタイプ,NORMAL DJ LEVEL,HYPER 難易度,HYPER スコア,HYPER PGreat,HYPER Great,HYPER ミスカウント,HYPER クリアタイプ,HYPER DJ LEVEL,ANOTHER 難易度,ANOTHER スコア,ANOTHER PGreat,ANOTHER Great,ANOTHER ミスカウント,ANOTHER クリアタイプ,ANOTHER DJ LEVEL,LEGGENDARIA 難易度,LEGGENDARIA スコア,LEGGENDARIA PGreat,LEGGENDARIA Great,LEGGENDARIA ミスカウント,LEGGENDARIA クリアタイプ,LEGGENDARIA DJ LEVEL,最終プレー日時";

const NO_PLAY: &str = "0,0,0,0,---,NO PLAY,---";

fn history_row(title: &str, another: &str) -> String {
    format!(
        "IIDX RED,{},POP,artist,3,{},{},{},{},{},2025-01-01 12:00",
        title, NO_PLAY, NO_PLAY, NO_PLAY, another, NO_PLAY
    )
}

fn single_chart_master() -> String {
    format!(
        "{}\nIIDX RED,Test Song,POP,artist,11,SPA,,12,1000,150,150,150,80,120,1700,1950\n",
        MASTER_HEADER
    )
}

/// Two-row master and a single 1800 EX score on SPA
mod end_to_end_tests {
    use super::*;

    fn history() -> String {
        format!(
            "{}\n{}\n",
            HISTORY_HEADER,
            history_row("Test Song", "12,1800,850,100,12,HARD CLEAR,AAA")
        )
    }

    #[test]
    fn test_single_chart_result() {
        let charts = filter_playable_sp_charts(&load_catalog(&single_chart_master()));
        assert_eq!(charts.len(), 1);

        let aggregation = aggregate(&charts, &history(), &BpiConfig::default()).unwrap();
        let result = &aggregation.results[0];

        assert_eq!(result.difficulty, Difficulty::SpA);
        assert_eq!(result.ex_score, 1800);
        assert!((result.score_rate - 0.9).abs() < 1e-12);
        assert_eq!(result.max_minus, 200);
        assert_eq!(result.dj_level, DjLevel::Aaa);
        assert_eq!(result.clear_type, ClearType::HardClear);
        assert_eq!(result.miss_count, Some(12));
        assert_eq!(result.kaiden_diff, Some(100));
        assert_eq!(result.top_diff, Some(-150));
        assert!(result.bpi.is_some_and(|bpi| bpi > 0.0 && bpi < 100.0));
    }

    #[test]
    fn test_single_chart_level_stats() {
        let charts = filter_playable_sp_charts(&load_catalog(&single_chart_master()));
        let aggregation = aggregate(&charts, &history(), &BpiConfig::default()).unwrap();
        let summary = aggregation.summary;

        assert_eq!(summary.level_stats.len(), 1);
        let lv12 = &summary.level_stats[0];
        assert_eq!(lv12.level, 12);
        assert_eq!(lv12.total, 1);
        assert_eq!(lv12.played, 1);
        assert_eq!(lv12.pct99, 0);
        assert_eq!(lv12.pct95, 0);
        assert_eq!(lv12.max_minus_rank, 0);
        assert_eq!(lv12.aaa, 1);
        assert_eq!(lv12.aa, 1);
        assert_eq!(lv12.a, 1);

        assert_eq!(summary.played_charts, 1);
        assert_eq!(summary.total_ex_score, 1800);
        assert_eq!(summary.total_max_score, 2000);
        // A single BPI is its own overall BPI
        assert_eq!(summary.average_bpi, aggregation.results[0].bpi);
        assert!(summary.ability.single_note > 0.0);
    }

    #[test]
    fn test_exports_cover_every_result() {
        let analyzer = Analyzer::new(Config::default(), InlineSource::new(single_chart_master()));
        let response = analyzer.aggregate(&AggregateRequest::new(history())).unwrap();

        let tsv = generate_results_tsv(&response.results);
        assert_eq!(tsv.lines().count(), 2);
        assert!(tsv.contains("Test Song\tSPA\t12"));

        let json = generate_report_json(&Report::new(response, None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["results"][0]["exScore"], 1800);
        assert!(value["levelFilter"].is_null());
    }
}

/// Catalog loading and filtering
mod catalog_tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_master_row_round_trip() {
        let raw = format!(
            "{}\n1st style,\"Title, with comma\",G,A,1,SPN,,5,400,-,120,120,50,90,,\n\nshort,row\n",
            MASTER_HEADER
        );
        let catalog = load_catalog(&raw);
        assert_eq!(catalog.len(), 1);

        let chart = &catalog[0];
        assert_eq!(chart.title, "Title, with comma");
        assert_eq!(chart.difficulty, "SPN");
        assert_eq!(chart.level, 5);
        assert_eq!(chart.notes, 400);
        assert_eq!(chart.bpm, -1.0);
        assert_eq!(chart.bpm_min, 120.0);
        assert_eq!(chart.kaiden_average, 0);

        let target = chart.to_target().unwrap();
        assert_eq!(target.difficulty, Difficulty::SpN);
        assert_eq!(target.kaiden_average, None);
        assert_eq!(target.top_score, None);
    }

    #[test]
    fn test_playable_filter() {
        let raw = format!(
            "{}\n\
             v,A,G,X,1,SPA,,12,1000,150,150,150,1,1,1,1\n\
             v,B,G,X,1,DPA,,12,1000,150,150,150,1,1,1,1\n\
             v,C,G,X,1,SPH,,0,1000,150,150,150,1,1,1,1\n\
             v,D,G,X,1,SPL,,12,0,150,150,150,1,1,1,1\n\
             v,E,G,X,1,SPX,,12,1000,150,150,150,1,1,1,1\n",
            MASTER_HEADER
        );
        let charts = filter_playable_sp_charts(&load_catalog(&raw));
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "A");
    }

    #[test]
    fn test_huge_note_count_aggregates() {
        let raw = format!(
            "{}\nv,Huge,G,X,1,SPA,,12,3000000000,150,150,150,1,1,1700,1900\n",
            MASTER_HEADER
        );
        let charts = filter_playable_sp_charts(&load_catalog(&raw));
        assert_eq!(charts.len(), 1);

        let history = format!(
            "{}\n{}\n",
            HISTORY_HEADER,
            history_row("Huge", "12,1800,850,100,12,CLEAR,F")
        );
        let aggregation = aggregate(&charts, &history, &BpiConfig::default()).unwrap();

        assert_eq!(aggregation.results[0].max_score, 6_000_000_000);
        assert_eq!(aggregation.summary.total_max_score, 6_000_000_000);
    }

    #[test]
    fn test_catalog_cache_reused() {
        let catalog = MasterCatalog::new();
        let loads = Cell::new(0);
        for _ in 0..3 {
            let charts = catalog
                .get_or_load(|| {
                    loads.set(loads.get() + 1);
                    Ok(single_chart_master())
                })
                .unwrap();
            assert_eq!(charts.len(), 1);
        }
        assert_eq!(loads.get(), 1);
    }
}

/// Analyzer over a master file on disk
mod analyzer_tests {
    use super::*;

    fn write_master(dir: &tempfile::TempDir, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join("master_songs.csv");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_config_reads_master_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_master(&dir, single_chart_master().as_bytes());

        let config = Config {
            master_path: path,
            ..Config::default()
        };
        let analyzer = Analyzer::from_config(config);

        let summary = analyzer.catalog_summary().unwrap();
        assert_eq!(summary.total_charts, 1);
        assert_eq!(summary.level_counts.get(&12), Some(&1));
        assert_eq!(analyzer.unique_titles().unwrap(), vec!["Test Song"]);
    }

    #[test]
    fn test_missing_master_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = Analyzer::new(
            Config::default(),
            FileSource::new(dir.path().join("missing.csv")),
        );

        let response = analyzer.handle(&AggregateRequest::new(format!("{}\n", HISTORY_HEADER)));
        match response {
            ApiResponse::Error(payload) => assert!(payload.error.starts_with("IO error")),
            ApiResponse::Ok(_) => panic!("expected error payload"),
        }
    }

    #[test]
    fn test_empty_csv_rejected() {
        let analyzer = Analyzer::new(Config::default(), InlineSource::new(single_chart_master()));
        let response = analyzer.handle(&AggregateRequest::new(""));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"Invalid CSV format: csv is required"}"#);
    }

    #[test]
    fn test_unplayed_catalog() {
        let analyzer = Analyzer::new(Config::default(), InlineSource::new(single_chart_master()));
        let response = analyzer
            .aggregate(&AggregateRequest::new(format!("{}\n", HISTORY_HEADER)))
            .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].dj_level, DjLevel::F);
        assert_eq!(response.results[0].bpi, None);
        assert_eq!(response.summary.played_charts, 0);
        assert_eq!(response.summary.average_bpi, None);
        assert_eq!(response.summary.ability.single_note, 0.0);
        assert_eq!(response.summary.ability.jikara, 0.0);
    }
}
