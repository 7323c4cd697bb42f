use crate::calibration::CalibrationReport;
use crate::types::report::ScoreResponse;

pub fn to_markdown(response: &ScoreResponse) -> String {
    let mut output = String::new();
    output.push_str("# Date Guess Score\n\n");
    output.push_str(&format!(
        "Score: {} / {}\n\n",
        response.score, response.max_possible
    ));
    output.push_str(&format!("- actual date: {}\n", response.actual_date));
    output.push_str(&format!("- category: {}\n", response.category));
    output.push_str(&format!(
        "- difference: {} days ({:.2} years)\n",
        response.difference_days, response.scoring_details.years_difference
    ));
    output.push_str(&format!("- {}\n\n", response.explanation));

    output.push_str("## Thresholds\n\n");
    output.push_str(&format!(
        "- full points up to {} days\n- no points from {} days\n",
        response.scoring_details.full_points_threshold_days,
        response.scoring_details.zero_points_threshold_days
    ));

    output
}

pub fn calibration_to_markdown(report: &CalibrationReport) -> String {
    let mut output = String::new();
    output.push_str("# Scoring Calibration\n\n");
    output.push_str("| actual | guess | days | years | score | category |\n");
    output.push_str("|---|---|---:|---:|---:|---|\n");
    for row in &report.rows {
        output.push_str(&format!(
            "| {} | {} | {} | {:.2} | {}/{} | {} |\n",
            row.actual_date,
            row.guess_date,
            row.difference_days,
            row.years_difference,
            row.score,
            report.max_possible,
            row.category
        ));
    }

    output.push_str("\n## Ranges\n\n");
    output.push_str(&format!(
        "- full points: {}\n- partial points: {}\n- no points: {}\n",
        report.ranges.full_points_range,
        report.ranges.partial_points_range,
        report.ranges.zero_points_range
    ));

    output
}
