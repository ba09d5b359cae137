//! Chart rendering
//!
//! Pure presentational functions: each takes an already-shaped chart array
//! (or scalar) and renders it as text for the terminal dashboard. No data
//! transformation happens here beyond label formatting.

use std::fmt::Write;

use crate::models::{ActivityPoint, KeyData, PerformanceEntry, ScoreSlice, SessionPoint};

/// Single-letter French abbreviation for a weekday (1 = Monday .. 7 = Sunday)
///
/// Synthetic padding days (0 and 8) and anything else out of range have no
/// label.
pub fn weekday_letter(day: u8) -> Option<char> {
    match day {
        1 => Some('L'),
        2 => Some('M'),
        3 => Some('M'),
        4 => Some('J'),
        5 => Some('V'),
        6 => Some('S'),
        7 => Some('D'),
        _ => None,
    }
}

/// Render the daily activity chart
pub fn activity_chart(points: &[ActivityPoint]) -> String {
    let mut out = String::from("Daily activity\n");
    for point in points {
        let _ = writeln!(
            out,
            "  {:>2}  {:6.1} kg  {:6.0} kcal",
            point.label, point.weight_kg, point.calories_burned
        );
    }
    out
}

/// Render the average session length chart
///
/// Padding points carry no weekday label and render as a continuation mark.
pub fn sessions_chart(points: &[SessionPoint]) -> String {
    let mut out = String::from("Average session length\n");
    for point in points {
        let label = weekday_letter(point.day).unwrap_or('·');
        let _ = writeln!(out, "  {}  {:5.1} min", label, point.duration_minutes);
    }
    out
}

/// Render the performance radar values
pub fn performance_chart(entries: &[PerformanceEntry]) -> String {
    let mut out = String::from("Performance\n");
    for entry in entries {
        let _ = writeln!(out, "  {:<12} {:6.0}", entry.label, entry.value);
    }
    out
}

/// Render the radial score chart
///
/// The slices arrive background-first; the second slice is the actual score.
pub fn score_chart(slices: &[ScoreSlice; 2]) -> String {
    format!("Score\n  {:.0}% of your goal\n", slices[1].value)
}

/// Render the nutritional key data cards
pub fn key_data_cards(key_data: &KeyData) -> String {
    format!(
        "Key data\n  Calories      {:6.0} kcal\n  Proteins      {:6.0} g\n  Carbohydrates {:6.0} g\n  Lipids        {:6.0} g\n",
        key_data.calorie_count,
        key_data.protein_count,
        key_data.carbohydrate_count,
        key_data.lipid_count
    )
}
