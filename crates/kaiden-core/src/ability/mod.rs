//! Ability scores derived from score-rate distributions.
//!
//! - single-note ability: accuracy ceiling, from the best three score rates
//! - fundamentals ("jikara"): consistency across the ≤10, 11 and 12 level groups,
//!   penalized by a steep drop-off at level 12 and by the total miss count
//!
//! Both scores are clamped to [0, 100].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::levels;

/// Number of best score rates averaged for the single-note ability
const SINGLE_NOTE_TOP_N: usize = 3;

const SINGLE_NOTE_MODERATE_WEIGHT: f64 = 0.3;
const SINGLE_NOTE_MODERATE_EXPONENT: i32 = 5;
const SINGLE_NOTE_STEEP_WEIGHT: f64 = 0.7;
const SINGLE_NOTE_STEEP_EXPONENT: i32 = 25;

const JIKARA_BASE_EXPONENT: i32 = 5;
const JIKARA_SLOPE_DECAY: f64 = 6.0;

/// Miss factor: 0 misses -> 1.0, 100 -> ~0.9, floor 0.7
const MISS_FACTOR_FLOOR: f64 = 0.7;
const MISS_FACTOR_SCALE: f64 = 247.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScores {
    /// Single-note ability (0-100)
    pub single_note: f64,
    /// Fundamentals ability (0-100)
    pub jikara: f64,
}

/// Group-average score rates and misses feeding the fundamentals ability
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JikaraInputs {
    /// Mean score rate of levels 1-10, `None` without played charts
    pub r_lv10: Option<f64>,
    pub r_lv11: Option<f64>,
    pub r_lv12: Option<f64>,
    pub total_misses: u32,
}

/// Single-note ability from the mean of the best score rates.
///
/// | mean rate | score |
/// |-----------|------:|
/// | 50%       |   0   |
/// | 90%       |  10.1 |
/// | 95%       |  22.7 |
/// | 99%       |  69.4 |
/// | 100%      | 100   |
pub fn single_note_ability(avg_score_rate: f64) -> f64 {
    if avg_score_rate <= 0.5 {
        return 0.0;
    }
    if avg_score_rate >= 1.0 {
        return 100.0;
    }

    let x = 2.0 * avg_score_rate - 1.0;
    let score = 100.0
        * (SINGLE_NOTE_MODERATE_WEIGHT * x.powi(SINGLE_NOTE_MODERATE_EXPONENT)
            + SINGLE_NOTE_STEEP_WEIGHT * x.powi(SINGLE_NOTE_STEEP_EXPONENT));
    score.clamp(0.0, 100.0)
}

/// Fundamentals ability.
///
/// ```text
/// base(r)        = 100 * (2r - 1)^5           (r > 0.5, else 0)
/// slopeFactor(s) = exp(-6 * s)                (s = max(0, (r10 - r12) / 2))
/// missFactor(m)  = 0.7 + 0.3 * exp(-m / 247)
/// ```
pub fn jikara(inputs: &JikaraInputs) -> f64 {
    let rates: Vec<f64> = [inputs.r_lv10, inputs.r_lv11, inputs.r_lv12]
        .into_iter()
        .flatten()
        .collect();
    if rates.is_empty() {
        return 0.0;
    }

    let r_avg = rates.iter().sum::<f64>() / rates.len() as f64;
    let base = if r_avg > 0.5 {
        100.0 * (2.0 * r_avg - 1.0).powi(JIKARA_BASE_EXPONENT)
    } else {
        0.0
    };

    // Slope only applies when both ends of the level range are present
    let slope_factor = match (inputs.r_lv10, inputs.r_lv12) {
        (Some(r10), Some(r12)) => {
            let s = ((r10 - r12) / 2.0).max(0.0);
            (-JIKARA_SLOPE_DECAY * s).exp()
        }
        _ => 1.0,
    };

    let miss_factor = miss_factor(inputs.total_misses);

    (base * slope_factor * miss_factor).clamp(0.0, 100.0)
}

fn miss_factor(total_misses: u32) -> f64 {
    MISS_FACTOR_FLOOR
        + (1.0 - MISS_FACTOR_FLOOR) * (-f64::from(total_misses) / MISS_FACTOR_SCALE).exp()
}

/// Compute both ability scores.
///
/// `score_rates` are the rates of every played chart; `level_averages` maps a
/// level to its average rate (levels without plays may be absent or 0).
///
/// The ≤10 group is the unweighted mean of the per-level averages of levels
/// 1-10, not a mean over charts.
// TODO: weight the ≤10 group by played count instead of averaging level means.
pub fn calculate_ability_scores(
    score_rates: &[f64],
    level_averages: &BTreeMap<u8, f64>,
    total_misses: u32,
) -> AbilityScores {
    let mut sorted = score_rates.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    let top: &[f64] = &sorted[..sorted.len().min(SINGLE_NOTE_TOP_N)];
    let avg_top = if top.is_empty() {
        0.0
    } else {
        top.iter().sum::<f64>() / top.len() as f64
    };

    let played_average = |level: u8| level_averages.get(&level).copied().filter(|&r| r > 0.0);

    let low_rates: Vec<f64> = (levels::MIN_LEVEL..=levels::LOW_GROUP_MAX)
        .filter_map(played_average)
        .collect();
    let r_lv10 = if low_rates.is_empty() {
        None
    } else {
        Some(low_rates.iter().sum::<f64>() / low_rates.len() as f64)
    };

    AbilityScores {
        single_note: single_note_ability(avg_top),
        jikara: jikara(&JikaraInputs {
            r_lv10,
            r_lv11: played_average(11),
            r_lv12: played_average(12),
            total_misses,
        }),
    }
}
