//! BPI (Beat Power Indicator).
//!
//! A single-chart BPI places an EX score on a power-law scale anchored at
//! two reference scores: the kaiden average (BPI 0) and the top score
//! (BPI 100). Sub-average scores go negative.
//!
//! The overall BPI combines single-chart values with a power mean whose
//! exponent grows with the number of charts (`log2(n)`).

use crate::config::{DEFAULT_BPI_COEFFICIENT, DEFAULT_MIN_BPI};

/// Inputs of a single-chart BPI calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BpiParams {
    pub ex_score: i64,
    pub kaiden_average: i64,
    pub top_score: i64,
    pub total_notes: i64,
    pub coefficient: f64,
}

impl BpiParams {
    pub fn new(ex_score: i64, kaiden_average: i64, top_score: i64, total_notes: i64) -> Self {
        Self {
            ex_score,
            kaiden_average,
            top_score,
            total_notes,
            coefficient: DEFAULT_BPI_COEFFICIENT,
        }
    }

    pub fn with_coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }
}

/// Pika-Great-Function: maps a score rate onto a virtual PGREAT-equivalent scale.
///
/// Saturates at `notes * 2` for a perfect rate; diverges as the rate approaches 1.
pub fn pgf(rate: f64, total_notes: i64) -> f64 {
    if rate >= 1.0 {
        return total_notes as f64 * 2.0;
    }
    1.0 + (rate - 0.5) / (1.0 - rate)
}

/// Calculate the BPI of one chart.
///
/// Returns `None` when the anchors are missing or out of order, the score or
/// note count is not positive, or any step of the formula degenerates.
pub fn calculate_bpi(params: &BpiParams) -> Option<f64> {
    let BpiParams {
        ex_score,
        kaiden_average,
        top_score,
        total_notes,
        coefficient,
    } = *params;

    if total_notes <= 0 || ex_score <= 0 {
        return None;
    }
    if kaiden_average <= 0 || top_score <= 0 || top_score <= kaiden_average {
        return None;
    }

    let max_score = total_notes as f64 * 2.0;
    let s = pgf(ex_score as f64 / max_score, total_notes);
    let k = pgf(kaiden_average as f64 / max_score, total_notes);
    let z = pgf(top_score as f64 / max_score, total_notes);

    if k <= 0.0 || z <= 0.0 {
        return None;
    }

    let s_prime = s / k;
    let z_prime = z / k;
    if z_prime <= 1.0 {
        return None;
    }

    let ln_z = z_prime.ln();
    if ln_z <= 0.0 {
        return None;
    }
    let ln_s = s_prime.ln().abs();

    let sign = if ex_score >= kaiden_average { 1.0 } else { -1.0 };
    let result = sign * 100.0 * ln_s.powf(coefficient) / ln_z.powf(coefficient);

    result.is_finite().then_some(result)
}

/// Combine single-chart BPIs into an overall BPI.
///
/// Each value is floored at `min_bpi`, then combined with a sign-preserving
/// power mean of exponent `log2(n)`. A single value is returned as-is
/// (after flooring). Returns `None` for an empty input.
pub fn calculate_overall_bpi(values: &[f64], min_bpi: f64) -> Option<f64> {
    let clamped: Vec<f64> = values.iter().map(|&bpi| bpi.max(min_bpi)).collect();
    let first = *clamped.first()?;

    let n = clamped.len() as f64;
    let k = n.log2();
    if k <= 0.0 {
        return Some(first);
    }

    let sum: f64 = clamped.iter().map(|&bpi| signed_pow(bpi, k)).sum();
    let result = signed_pow(sum / n, 1.0 / k);

    result.is_finite().then_some(result)
}

/// `calculate_overall_bpi` with the default -15 floor
pub fn calculate_overall_bpi_default(values: &[f64]) -> Option<f64> {
    calculate_overall_bpi(values, DEFAULT_MIN_BPI)
}

fn signed_pow(value: f64, exponent: f64) -> f64 {
    if value >= 0.0 {
        value.powf(exponent)
    } else {
        -(-value).powf(exponent)
    }
}
