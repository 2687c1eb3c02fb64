use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum ClearType {
    #[default]
    #[serde(rename = "NO PLAY")]
    #[strum(serialize = "NO PLAY")]
    NoPlay = 0,
    #[serde(rename = "FAILED")]
    #[strum(serialize = "FAILED")]
    Failed = 1,
    #[serde(rename = "ASSIST CLEAR")]
    #[strum(serialize = "ASSIST CLEAR")]
    AssistClear = 2,
    #[serde(rename = "EASY CLEAR")]
    #[strum(serialize = "EASY CLEAR")]
    EasyClear = 3,
    #[serde(rename = "CLEAR")]
    #[strum(serialize = "CLEAR")]
    Clear = 4,
    #[serde(rename = "HARD CLEAR")]
    #[strum(serialize = "HARD CLEAR")]
    HardClear = 5,
    #[serde(rename = "EX HARD CLEAR")]
    #[strum(serialize = "EX HARD CLEAR")]
    ExHardClear = 6,
    #[serde(rename = "FULLCOMBO CLEAR")]
    #[strum(serialize = "FULLCOMBO CLEAR")]
    FullCombo = 7,
}

impl ClearType {
    /// Parse the export's clear type cell; unknown text is NO PLAY
    pub fn from_export(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Get the short lamp name (for compact display)
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::NoPlay => "NO PLAY",
            Self::Failed => "FAILED",
            Self::AssistClear => "ASSIST",
            Self::EasyClear => "EASY",
            Self::Clear => "CLEAR",
            Self::HardClear => "HARD",
            Self::ExHardClear => "EX HARD",
            Self::FullCombo => "FC",
        }
    }
}

impl std::fmt::Display for ClearType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
