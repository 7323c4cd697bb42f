use crate::error::DateScoreError;
use crate::types::scoring::ScoringPolicy;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateScoreConfig {
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    pub full_points_threshold_days: Option<f64>,
    pub zero_points_threshold_days: Option<f64>,
    pub max_points: Option<u32>,
}

impl DateScoreConfig {
    pub fn policy(&self) -> ScoringPolicy {
        let defaults = ScoringPolicy::default();
        match &self.scoring {
            Some(scoring) => ScoringPolicy {
                full_points_threshold_days: scoring
                    .full_points_threshold_days
                    .unwrap_or(defaults.full_points_threshold_days),
                zero_points_threshold_days: scoring
                    .zero_points_threshold_days
                    .unwrap_or(defaults.zero_points_threshold_days),
                max_points: scoring.max_points.unwrap_or(defaults.max_points),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), DateScoreError> {
        self.policy().validate()
    }
}

impl ScoringPolicy {
    pub fn validate(&self) -> Result<(), DateScoreError> {
        for (key, value) in [
            ("full_points_threshold_days", self.full_points_threshold_days),
            ("zero_points_threshold_days", self.zero_points_threshold_days),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DateScoreError::ConfigParse(format!(
                    "scoring.{key} must be a finite, non-negative number of days (found {value})"
                )));
            }
        }

        if self.full_points_threshold_days >= self.zero_points_threshold_days {
            return Err(DateScoreError::ConfigParse(format!(
                "scoring.full_points_threshold_days ({}) must be below scoring.zero_points_threshold_days ({})",
                self.full_points_threshold_days, self.zero_points_threshold_days
            )));
        }

        if self.max_points == 0 {
            return Err(DateScoreError::ConfigParse(
                "scoring.max_points must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
