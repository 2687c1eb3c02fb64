use serde::{Deserialize, Serialize};

use crate::chart::Difficulty;

/// A playable SP chart with its BPI anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetChart {
    pub title: String,
    pub difficulty: Difficulty,
    pub level: u8,
    pub notes: u32,
    /// Kaiden average EX score; `None` when the master has no positive value
    pub kaiden_average: Option<u32>,
    /// Top EX score; `None` when the master has no positive value
    pub top_score: Option<u32>,
}

impl TargetChart {
    /// Calculate max EX score (notes * 2)
    pub fn max_ex_score(&self) -> u64 {
        u64::from(self.notes) * 2
    }
}
