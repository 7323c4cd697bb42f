use crate::types::report::ScoreResponse;

pub fn to_text(response: &ScoreResponse) -> String {
    format!(
        "{}/{} ({}) - {} days off, {:.2} years\n{}",
        response.score,
        response.max_possible,
        response.category,
        response.difference_days,
        response.scoring_details.years_difference,
        response.explanation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::handle_body;
    use crate::types::scoring::ScoringPolicy;

    #[test]
    fn text_summary_leads_with_score() {
        let response = handle_body(
            &ScoringPolicy::default(),
            r#"{"actual_date": "2023-01-01", "guess_date": "2023-03-01"}"#,
        )
        .expect("request should score");
        let rendered = to_text(&response);
        assert!(rendered.starts_with("100/100 (Perfect Range) - 59 days off, 0.16 years"));
        assert!(rendered.ends_with("Within 6 months - full points!"));
    }
}
