//! Date-proximity scoring.
//!
//! A guess inside the full-points threshold earns the maximum, a guess at or
//! past the zero-points threshold earns nothing, and everything in between
//! decays linearly.

use crate::date::{self, ParsedDate, ACTUAL_DATE_FORMATS, GUESS_DATE_FORMATS};
use crate::error::DateParseError;
use crate::types::scoring::{Category, ScoreResult, ScoringPolicy, DAYS_PER_YEAR};
use chrono::NaiveDate;

/// Scores a guess against the actual publication date using the default policy.
pub fn score(actual: &str, guess: &str) -> Result<ScoreResult, DateParseError> {
    ScoringPolicy::default().score(actual, guess)
}

pub fn parse_actual(input: &str) -> Result<ParsedDate, DateParseError> {
    date::parse_with(input, &ACTUAL_DATE_FORMATS)
        .into_option()
        .ok_or_else(|| DateParseError::actual(input))
}

pub fn parse_guess(input: &str) -> Result<ParsedDate, DateParseError> {
    date::parse_with(input, &GUESS_DATE_FORMATS)
        .into_option()
        .ok_or_else(|| DateParseError::guess(input))
}

impl ScoringPolicy {
    pub fn score(&self, actual: &str, guess: &str) -> Result<ScoreResult, DateParseError> {
        let actual = parse_actual(actual)?;
        let guess = parse_guess(guess)?;
        Ok(self.score_dates(actual.date, guess.date))
    }

    pub fn score_dates(&self, actual: NaiveDate, guess: NaiveDate) -> ScoreResult {
        let difference_days = actual.signed_duration_since(guess).num_days().unsigned_abs();
        let (score, category) = self.score_days(difference_days);
        let result = ScoreResult {
            score,
            difference_days,
            category,
            years_difference: round_to_hundredths(difference_days as f64 / DAYS_PER_YEAR),
        };
        tracing::debug!(
            %actual,
            %guess,
            difference_days,
            score,
            category = %category,
            "scored guess"
        );
        result
    }

    /// The piecewise function on its own.
    ///
    /// Partial scores round to nearest with ties to even, then clamp at zero,
    /// so a difference a few days short of the zero threshold can already
    /// score 0 while still reporting `PartialPoints`.
    pub fn score_days(&self, difference_days: u64) -> (u32, Category) {
        let days = difference_days as f64;
        if days <= self.full_points_threshold_days {
            return (self.max_points, Category::PerfectRange);
        }
        if days >= self.zero_points_threshold_days {
            return (0, Category::NoPoints);
        }

        let max = f64::from(self.max_points);
        let excess_days = days - self.full_points_threshold_days;
        let reduction = (excess_days / self.linear_range()) * max;
        let score = (max - reduction).round_ties_even().max(0.0);
        (score as u32, Category::PartialPoints)
    }

    pub fn explanation(&self, result: &ScoreResult) -> String {
        match result.category {
            Category::PerfectRange => format!(
                "Within {} - full points!",
                describe_span(self.full_points_threshold_days)
            ),
            Category::NoPoints => format!(
                "More than {} off - no points",
                describe_span(self.zero_points_threshold_days)
            ),
            Category::PartialPoints => format!(
                "About {:.1} years off - partial points",
                result.difference_days as f64 / DAYS_PER_YEAR
            ),
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Human wording for a threshold: whole years from one year up, months below.
pub fn describe_span(days: f64) -> String {
    let years = (days / DAYS_PER_YEAR).round();
    if years >= 1.0 && (days / DAYS_PER_YEAR - years).abs() < 0.05 {
        return plural(years as u64, "year");
    }
    let months = (days / (DAYS_PER_YEAR / 12.0)).round();
    if months >= 1.0 {
        return plural(months as u64, "month");
    }
    plural(days.round() as u64, "day")
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
