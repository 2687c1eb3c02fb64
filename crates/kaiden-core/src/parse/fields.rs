/// Parse the leading integer of a cell, ignoring trailing garbage ("12abc" -> 12).
///
/// Returns `None` when the cell has no leading digits.
pub fn parse_int(value: &str) -> Option<i64> {
    let value = value.trim();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Parse a float cell; empty, zero or unparseable cells become -1.
pub fn parse_float_or_unset(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(-1.0)
}
