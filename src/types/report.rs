use crate::date::ParsedDate;
use crate::types::scoring::{Category, ScoreResult, ScoringPolicy};
use serde::{Deserialize, Serialize};

/// Body of a scoring request. Missing fields are treated as empty strings
/// and fail date parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub actual_date: String,
    #[serde(default)]
    pub guess_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringDetails {
    pub full_points_threshold_days: f64,
    pub zero_points_threshold_days: f64,
    pub within_full_range: bool,
    pub years_difference: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub status: Status,
    pub score: u32,
    pub difference_days: u64,
    pub actual_date: ParsedDate,
    pub category: Category,
    pub explanation: String,
    pub max_possible: u32,
    pub scoring_details: ScoringDetails,
}

impl ScoreResponse {
    pub fn new(policy: &ScoringPolicy, actual_date: ParsedDate, result: &ScoreResult) -> Self {
        Self {
            status: Status::Success,
            score: result.score,
            difference_days: result.difference_days,
            actual_date,
            category: result.category,
            explanation: policy.explanation(result),
            max_possible: policy.max_points,
            scoring_details: ScoringDetails {
                full_points_threshold_days: policy.full_points_threshold_days,
                zero_points_threshold_days: policy.zero_points_threshold_days,
                within_full_range: result.category == Category::PerfectRange,
                years_difference: result.years_difference,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }
}
