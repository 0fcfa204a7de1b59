//! Display formatting for meals, portions and scale readings.
//!
//! Portions are whole grams on the wire, but the container scale and the
//! history endpoint report floats; both end up here so every table and
//! message prints grams the same way.
//!
//! ```rust
//! use catfeed::libs::formatter::{format_grams, format_weight};
//!
//! assert_eq!(format_grams(150.0), "150g");
//! assert_eq!(format_grams(87.26), "87.3g");
//! assert_eq!(format_weight(None), "--");
//! ```

use super::schedule::NextMeal;

/// Placeholder shown when the scale did not report a value.
pub const UNKNOWN_WEIGHT: &str = "--";

/// Formats a gram amount, dropping the fraction when it is whole.
pub fn format_grams(grams: f64) -> String {
    if grams.fract() == 0.0 {
        format!("{}g", grams as i64)
    } else {
        format!("{:.1}g", grams)
    }
}

/// Formats a container reading, `--` when unknown.
pub fn format_weight(weight: Option<f64>) -> String {
    weight.map(format_grams).unwrap_or_else(|| UNKNOWN_WEIGHT.to_string())
}

/// `"07:00 - 150g"`
pub fn format_meal(meal: &NextMeal) -> String {
    format!("{} - {}g", meal.time, meal.amount)
}

