use serde::{Deserialize, Serialize};

use crate::config::thresholds;
use crate::score::DjLevel;

/// Per-level rollup of played charts.
///
/// Bucket counts are cumulative: a 99% score also counts toward 98%, 97% and
/// every looser threshold, so counts never decrease as the threshold relaxes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStats {
    pub level: u8,
    pub total: u32,
    pub played: u32,
    pub average_rate: f64,
    /// MAX-minus below 10
    pub max_minus_single_digit: u32,
    /// MAX-minus below 100
    pub max_minus_double_digit: u32,
    pub pct99: u32,
    pub pct98: u32,
    pub pct97: u32,
    pub pct96: u32,
    pub pct95: u32,
    /// Score rate at or above the MAX- rank (17/18)
    pub max_minus_rank: u32,
    pub aaa: u32,
    pub aa: u32,
    pub a: u32,
    #[serde(skip)]
    rate_sum: f64,
}

impl LevelStats {
    pub fn new(level: u8) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Count one played chart with a positive score
    pub fn record(&mut self, score_rate: f64, max_minus: i64) {
        self.played += 1;
        self.rate_sum += score_rate;

        let bump = |count: &mut u32, hit: bool| {
            if hit {
                *count += 1;
            }
        };

        bump(
            &mut self.max_minus_single_digit,
            max_minus < thresholds::MAX_MINUS_SINGLE_DIGIT,
        );
        bump(
            &mut self.max_minus_double_digit,
            max_minus < thresholds::MAX_MINUS_DOUBLE_DIGIT,
        );
        bump(&mut self.pct99, score_rate >= thresholds::PCT99);
        bump(&mut self.pct98, score_rate >= thresholds::PCT98);
        bump(&mut self.pct97, score_rate >= thresholds::PCT97);
        bump(&mut self.pct96, score_rate >= thresholds::PCT96);
        bump(&mut self.pct95, score_rate >= thresholds::PCT95);
        bump(
            &mut self.max_minus_rank,
            score_rate >= thresholds::MAX_MINUS_RANK,
        );

        let grade = DjLevel::from_score_rate(score_rate);
        bump(&mut self.aaa, grade >= DjLevel::Aaa);
        bump(&mut self.aa, grade >= DjLevel::Aa);
        bump(&mut self.a, grade >= DjLevel::A);
    }

    /// Compute the average rate from the recorded charts (0 when unplayed)
    pub fn finalize(&mut self) {
        self.average_rate = if self.played > 0 {
            self.rate_sum / f64::from(self.played)
        } else {
            0.0
        };
    }

    /// Score-rate buckets from strictest to loosest
    pub fn rate_buckets(&self) -> [u32; 9] {
        [
            self.pct99,
            self.pct98,
            self.pct97,
            self.pct96,
            self.pct95,
            self.max_minus_rank,
            self.aaa,
            self.aa,
            self.a,
        ]
    }
}
