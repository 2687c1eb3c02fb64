use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// DJ LEVEL
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
pub enum DjLevel {
    #[default]
    F = 1,
    E = 2,
    D = 3,
    C = 4,
    B = 5,
    A = 6,
    #[serde(rename = "AA")]
    #[strum(serialize = "AA")]
    Aa = 7,
    #[serde(rename = "AAA")]
    #[strum(serialize = "AAA")]
    Aaa = 8,
}

impl DjLevel {
    /// Grade for a score rate. A rate exactly on a band boundary gets the higher grade.
    pub fn from_score_rate(rate: f64) -> Self {
        if rate >= 8.0 / 9.0 {
            Self::Aaa
        } else if rate >= 7.0 / 9.0 {
            Self::Aa
        } else if rate >= 6.0 / 9.0 {
            Self::A
        } else if rate >= 5.0 / 9.0 {
            Self::B
        } else if rate >= 4.0 / 9.0 {
            Self::C
        } else if rate >= 3.0 / 9.0 {
            Self::D
        } else if rate >= 2.0 / 9.0 {
            Self::E
        } else {
            Self::F
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for DjLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
