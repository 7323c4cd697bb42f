use serde::{Deserialize, Serialize};
use std::fmt;

/// Six months, counted as half of a 365.25-day year.
pub const FULL_POINTS_THRESHOLD: f64 = 182.5;
/// Three years.
pub const ZERO_POINTS_THRESHOLD: f64 = 1095.0;
pub const LINEAR_RANGE: f64 = ZERO_POINTS_THRESHOLD - FULL_POINTS_THRESHOLD;
pub const MAX_SCORE: u32 = 100;
pub const DAYS_PER_YEAR: f64 = 365.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Perfect Range")]
    PerfectRange,
    #[serde(rename = "Partial Points")]
    PartialPoints,
    #[serde(rename = "No Points")]
    NoPoints,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::PerfectRange => "Perfect Range",
            Self::PartialPoints => "Partial Points",
            Self::NoPoints => "No Points",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u32,
    pub difference_days: u64,
    pub category: Category,
    pub years_difference: f64,
}

/// Thresholds and ceiling of the piecewise-linear decay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub full_points_threshold_days: f64,
    pub zero_points_threshold_days: f64,
    pub max_points: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            full_points_threshold_days: FULL_POINTS_THRESHOLD,
            zero_points_threshold_days: ZERO_POINTS_THRESHOLD,
            max_points: MAX_SCORE,
        }
    }
}

impl ScoringPolicy {
    pub fn linear_range(&self) -> f64 {
        self.zero_points_threshold_days - self.full_points_threshold_days
    }
}
