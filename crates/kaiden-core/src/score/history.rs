use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::chart::Difficulty;
use crate::score::ClearType;

/// One chart result from a play history export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedScore {
    pub title: String,
    pub difficulty: Difficulty,
    pub ex_score: u32,
    pub pgreat: u32,
    pub great: u32,
    /// `None` when the export has no miss count for this chart
    pub miss_count: Option<u32>,
    pub clear_type: ClearType,
    /// DJ LEVEL exactly as exported; not validated against `DjLevel`
    pub dj_level: Option<String>,
}

impl ParsedScore {
    /// Explicit "never attempted" entry
    pub fn no_play(title: &str, difficulty: Difficulty) -> Self {
        Self {
            title: title.to_string(),
            difficulty,
            ex_score: 0,
            pgreat: 0,
            great: 0,
            miss_count: None,
            clear_type: ClearType::NoPlay,
            dj_level: None,
        }
    }

    pub fn is_no_play(&self) -> bool {
        self.ex_score == 0 && self.clear_type == ClearType::NoPlay
    }
}

/// Parsed play history keyed by song title
#[derive(Debug, Clone, Default)]
pub struct HistoryMap {
    scores: HashMap<String, Vec<ParsedScore>>,
}

impl HistoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert all difficulties of a title, replacing any earlier row
    pub fn insert(&mut self, title: String, scores: Vec<ParsedScore>) {
        self.scores.insert(title, scores);
    }

    pub fn get(&self, title: &str) -> Option<&[ParsedScore]> {
        self.scores.get(title).map(Vec::as_slice)
    }

    /// Look up the score for one chart
    pub fn find(&self, title: &str, difficulty: Difficulty) -> Option<&ParsedScore> {
        self.get(title)?
            .iter()
            .find(|s| s.difficulty == difficulty)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
