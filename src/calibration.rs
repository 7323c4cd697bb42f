use crate::scoring::{describe_span, parse_actual, parse_guess};
use crate::types::scoring::{Category, ScoringPolicy};
use serde::Serialize;

/// Reference guesses against a fixed actual date, from an exact hit out to four years.
pub const REFERENCE_PAIRS: [(&str, &str); 9] = [
    ("2023-01-01", "2023-01-01"),
    ("2023-01-01", "2023-03-01"),
    ("2023-01-01", "2023-07-01"),
    ("2023-01-01", "2024-01-01"),
    ("2023-01-01", "2024-07-01"),
    ("2023-01-01", "2025-01-01"),
    ("2023-01-01", "2025-07-01"),
    ("2023-01-01", "2026-01-01"),
    ("2023-01-01", "2027-01-01"),
];

#[derive(Debug, Clone, Serialize)]
pub struct CalibrationRow {
    pub actual_date: String,
    pub guess_date: String,
    pub difference_days: u64,
    pub score: u32,
    pub category: Category,
    pub years_difference: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringRanges {
    pub full_points_range: String,
    pub partial_points_range: String,
    pub zero_points_range: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalibrationReport {
    pub max_possible: u32,
    pub rows: Vec<CalibrationRow>,
    pub ranges: ScoringRanges,
}

pub fn calibrate(policy: &ScoringPolicy) -> CalibrationReport {
    let rows = REFERENCE_PAIRS
        .iter()
        .filter_map(|(actual, guess)| {
            let actual_date = parse_actual(actual).ok()?;
            let guess_date = parse_guess(guess).ok()?;
            let result = policy.score_dates(actual_date.date, guess_date.date);
            Some(CalibrationRow {
                actual_date: actual.to_string(),
                guess_date: guess.to_string(),
                difference_days: result.difference_days,
                score: result.score,
                category: result.category,
                years_difference: result.years_difference,
            })
        })
        .collect();

    CalibrationReport {
        max_possible: policy.max_points,
        rows,
        ranges: ranges(policy),
    }
}

fn ranges(policy: &ScoringPolicy) -> ScoringRanges {
    let full = policy.full_points_threshold_days;
    let zero = policy.zero_points_threshold_days;
    ScoringRanges {
        full_points_range: format!("0-{} (0-{full} days)", describe_span(full)),
        partial_points_range: format!(
            "{}-{} ({full}-{zero} days)",
            describe_span(full),
            describe_span(zero)
        ),
        zero_points_range: format!("{}+ ({zero}+ days)", describe_span(zero)),
    }
}
