use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

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
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Difficulty {
    #[serde(rename = "SPB")]
    #[strum(serialize = "SPB")]
    SpB = 0,
    #[serde(rename = "SPN")]
    #[strum(serialize = "SPN")]
    SpN = 1,
    #[serde(rename = "SPH")]
    #[strum(serialize = "SPH")]
    SpH = 2,
    #[serde(rename = "SPA")]
    #[strum(serialize = "SPA")]
    SpA = 3,
    #[serde(rename = "SPL")]
    #[strum(serialize = "SPL")]
    SpL = 4,
}

impl Difficulty {
    /// Width of one difficulty block in the e-amusement export
    pub const HISTORY_BLOCK_WIDTH: usize = 7;

    /// Column of the first difficulty block in the e-amusement export
    pub const HISTORY_FIRST_BLOCK: usize = 5;

    /// Parse a master-table tag; non-SP tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// First column of this difficulty's block in the e-amusement export
    /// (SPB: 5, SPN: 12, SPH: 19, SPA: 26, SPL: 33)
    pub fn history_offset(&self) -> usize {
        Self::HISTORY_FIRST_BLOCK + *self as usize * Self::HISTORY_BLOCK_WIDTH
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
