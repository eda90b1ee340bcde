//! Numeric parsing and averaging for scraped counters.
//!
//! The upstream site renders most counters as human-readable magnitude
//! strings ("5.3M", "3.2K"). Everything here is best-effort: garbage in
//! means zero out, never an error.

/// Convert a scraped magnitude string to a number.
///
/// Strips everything but digits and dots to get the coefficient and uses
/// the remaining characters as the unit suffix (`K`, `M`, `B`). An unknown
/// suffix leaves the coefficient untouched; an empty or unparsable input
/// yields 0.
pub fn parse_magnitude(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }

    let coefficient: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let unit: String = value
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '.')
        .collect();

    let Ok(coefficient) = coefficient.parse::<f64>() else {
        return 0.0;
    };

    // Scaled counts are whole numbers; rounding here keeps float noise
    // like 5.3 * 1e6 = 5299999.999... out of the result.
    match unit.trim() {
        "K" => (coefficient * 1_000.0).round(),
        "M" => (coefficient * 1_000_000.0).round(),
        "B" => (coefficient * 1_000_000_000.0).round(),
        _ => coefficient,
    }
}

/// Arithmetic mean of a slice. Empty input yields 0.0, never NaN.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Creator interaction rate: engagement per view, rounded to 2 decimals.
///
/// Returns 0.0 when `views` is zero or not a finite positive number, so
/// callers never see NaN or infinity.
pub fn interaction_rate(comments: f64, likes: f64, shares: f64, views: f64) -> f64 {
    if !views.is_finite() || views <= 0.0 {
        return 0.0;
    }
    round2((comments + likes + shares) / views)
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
