pub mod ability;
pub mod aggregate;
pub mod analyzer;
pub mod bpi;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod parse;
pub mod score;

pub use ability::{AbilityScores, calculate_ability_scores};
pub use aggregate::{
    Aggregation, LevelStats, ScoreResult, ScoreSummary, aggregate, aggregate_history,
};
pub use analyzer::{
    AggregateRequest, AggregateResponse, Analyzer, ApiResponse, CatalogSummary, FileSource,
    InlineSource, MasterSource,
};
pub use bpi::{BpiParams, calculate_bpi, calculate_overall_bpi};
pub use chart::{Difficulty, MasterCatalog, MasterChart, TargetChart};
pub use config::{BpiConfig, Config};
pub use error::{Error, Result};
pub use export::Report;
pub use parse::{decode_text, parse_history, split_csv_line};
pub use score::{ClearType, DjLevel, HistoryMap, ParsedScore};
