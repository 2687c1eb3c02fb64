//! Configuration and fixed table layouts.
//!
//! This module contains:
//! - `Config` - runtime settings loaded from a TOML file
//! - Level range and score-rate bucket thresholds
//! - Column layouts of the master table and the e-amusement export

mod settings;

pub use settings::*;

/// Chart level range covered by the level statistics.
pub mod levels {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 12;

    /// Highest level folded into the "≤10" group of the fundamentals ability.
    pub const LOW_GROUP_MAX: u8 = 10;

    pub fn is_valid(level: u8) -> bool {
        (MIN_LEVEL..=MAX_LEVEL).contains(&level)
    }
}

/// Score-rate thresholds for the cumulative level buckets.
pub mod thresholds {
    pub const PCT99: f64 = 0.99;
    pub const PCT98: f64 = 0.98;
    pub const PCT97: f64 = 0.97;
    pub const PCT96: f64 = 0.96;
    pub const PCT95: f64 = 0.95;

    /// MAX- rank: half a grade band above AAA.
    pub const MAX_MINUS_RANK: f64 = 17.0 / 18.0;

    /// MAX-minus below this counts as "single digit".
    pub const MAX_MINUS_SINGLE_DIGIT: i64 = 10;
    /// MAX-minus below this counts as "double digit".
    pub const MAX_MINUS_DOUBLE_DIGIT: i64 = 100;
}

/// Master table (master_songs.csv) column layout.
pub mod master_columns {
    pub const VERSION_FULL: usize = 0;
    pub const TITLE: usize = 1;
    pub const GENRE: usize = 2;
    pub const ARTIST: usize = 3;
    pub const VERSION: usize = 4;
    pub const DIFFICULTY: usize = 5;
    pub const LEVEL: usize = 7;
    pub const NOTES: usize = 8;
    pub const BPM: usize = 9;
    pub const BPM_MIN: usize = 10;
    pub const BPM_MAX: usize = 11;
    pub const MEASURE: usize = 12;
    pub const DURATION: usize = 13;
    pub const KAIDEN_AVERAGE: usize = 14;
    pub const TOP_SCORE: usize = 15;

    /// Rows with fewer columns are dropped.
    pub const MIN_COLUMNS: usize = 16;
}

/// e-amusement play history export layout.
pub mod history_columns {
    /// Required first header field.
    pub const HEADER_TOKEN: &str = "バージョン";

    pub const TITLE: usize = 1;

    /// Placeholder for "no data" in miss count and DJ LEVEL cells.
    pub const PLACEHOLDER: &str = "---";

    // Field offsets inside each 7-column difficulty block
    pub const LEVEL: usize = 0;
    pub const SCORE: usize = 1;
    pub const PGREAT: usize = 2;
    pub const GREAT: usize = 3;
    pub const MISS_COUNT: usize = 4;
    pub const CLEAR_TYPE: usize = 5;
    pub const DJ_LEVEL: usize = 6;
}
