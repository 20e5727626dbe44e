//! Human-readable years and durations.

use crate::config::ModelConfig;

/// Returned by [`format_year`] for non-finite input.
pub const INVALID_YEAR: &str = "Invalid year";
/// Returned by [`get_time_remaining`] for non-finite input.
pub const UNKNOWN_REMAINING: &str = "Unknown";

/// Render a fractional year as `Early`, `Mid` or `Late` plus the whole year.
///
/// Fractions below 0.25 are `Early`, below 0.5 `Mid`, and everything from
/// 0.5 up is `Late`; the third and fourth quarters share a label.
pub fn format_year(year: f64) -> String {
    if !year.is_finite() {
        return INVALID_YEAR.to_string();
    }

    // `+ 0.0` turns -0.0 into 0.0
    let whole = year.floor() + 0.0;
    let fraction = year - whole;
    let qualifier = if fraction < 0.25 {
        "Early"
    } else if fraction < 0.5 {
        "Mid"
    } else {
        // Third and fourth quarters are not distinguished.
        "Late"
    };
    format!("{qualifier} {whole:.0}")
}

/// Time from the model epoch until `target_year`, with the default epoch.
pub fn get_time_remaining(target_year: f64) -> String {
    get_time_remaining_with(&ModelConfig::default(), target_year)
}

/// Time from `config.current_year` until `target_year`.
///
/// Under one year: `"Less than 1 year"`. Under two: whole months.
/// Otherwise whole years.
pub fn get_time_remaining_with(config: &ModelConfig, target_year: f64) -> String {
    if !target_year.is_finite() {
        return UNKNOWN_REMAINING.to_string();
    }

    let remaining = target_year - config.current_year;
    if remaining < 1.0 {
        "Less than 1 year".to_string()
    } else if remaining < 2.0 {
        format!("~{} months", (remaining * 12.0).round() as i64)
    } else {
        format!("~{} years", remaining.round() as i64)
    }
}
