pub mod json;
pub mod md;
pub mod text;

use crate::calibration::CalibrationReport;
use crate::error::DateScoreError;
use crate::types::report::ScoreResponse;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Text,
}

pub fn render(response: &ScoreResponse, format: OutputFormat) -> Result<String, DateScoreError> {
    match format {
        OutputFormat::Json => json::to_json(response).map_err(DateScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(response)),
        OutputFormat::Text => Ok(text::to_text(response)),
    }
}

/// Calibration tables have no plain-text form; `Text` falls back to markdown.
pub fn render_calibration(
    report: &CalibrationReport,
    format: OutputFormat,
) -> Result<String, DateScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(DateScoreError::Json),
        OutputFormat::Md | OutputFormat::Text => Ok(md::calibration_to_markdown(report)),
    }
}
