/// Score rate in [0, 1]; 0 when the chart has no notes.
pub fn score_rate(ex_score: u32, notes: u32) -> f64 {
    if notes == 0 {
        return 0.0;
    }
    let max_score = f64::from(notes) * 2.0;
    (f64::from(ex_score) / max_score).clamp(0.0, 1.0)
}

/// Distance to the theoretical maximum (notes * 2 - ex_score).
///
/// Negative only when the score exceeds the maximum, which valid data never does.
pub fn max_minus(ex_score: u32, notes: u32) -> i64 {
    i64::from(notes) * 2 - i64::from(ex_score)
}

/// Format a score rate as a percentage with two decimals ("90.00%")
pub fn format_score_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Format a BPI value with two decimals, "-" when absent
pub fn format_bpi(bpi: Option<f64>) -> String {
    match bpi {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    }
}
