//! The request/response wrapper the game front end talks to: a JSON body with
//! `actual_date` and `guess_date` in, a scored envelope or an error out.

use crate::error::{DateScoreError, Result};
use crate::scoring::{parse_actual, parse_guess};
use crate::types::report::{ErrorResponse, ScoreRequest, ScoreResponse};
use crate::types::scoring::ScoringPolicy;

pub fn respond(policy: &ScoringPolicy, request: &ScoreRequest) -> Result<ScoreResponse> {
    let actual = parse_actual(&request.actual_date)?;
    let guess = parse_guess(&request.guess_date)?;
    let result = policy.score_dates(actual.date, guess.date);
    Ok(ScoreResponse::new(policy, actual, &result))
}

pub fn parse_request(body: &str) -> Result<ScoreRequest> {
    serde_json::from_str(body).map_err(|e| DateScoreError::InvalidRequest(e.to_string()))
}

pub fn handle_body(policy: &ScoringPolicy, body: &str) -> Result<ScoreResponse> {
    let request = parse_request(body)?;
    respond(policy, &request)
}

pub fn error_response(err: &DateScoreError) -> ErrorResponse {
    ErrorResponse::new(format!("Error calculating score: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateField;
    use serde_json::Value;

    fn to_value(response: &ScoreResponse) -> Value {
        serde_json::to_value(response).expect("response should serialize")
    }

    #[test]
    fn success_envelope_matches_wire_shape() {
        let response = handle_body(
            &ScoringPolicy::default(),
            r#"{"actual_date": "2023-01-01", "guess_date": "2024-01-01"}"#,
        )
        .expect("request should score");
        let value = to_value(&response);

        assert_eq!(value["status"], "success");
        assert_eq!(value["score"], 80);
        assert_eq!(value["difference_days"], 365);
        assert_eq!(value["actual_date"], "2023-01-01");
        assert_eq!(value["category"], "Partial Points");
        assert_eq!(value["explanation"], "About 1.0 years off - partial points");
        assert_eq!(value["max_possible"], 100);
        assert_eq!(value["scoring_details"]["full_points_threshold_days"], 182.5);
        assert_eq!(value["scoring_details"]["zero_points_threshold_days"], 1095.0);
        assert_eq!(value["scoring_details"]["within_full_range"], false);
        assert_eq!(value["scoring_details"]["years_difference"], 1.0);
    }

    #[test]
    fn month_only_actual_is_echoed_in_month_form() {
        let response = handle_body(
            &ScoringPolicy::default(),
            r#"{"actual_date": "2020-06", "guess_date": "2020-08-15"}"#,
        )
        .expect("request should score");
        assert_eq!(to_value(&response)["actual_date"], "2020-06");
        assert_eq!(response.difference_days, 75);
        assert!(response.scoring_details.within_full_range);
    }

    #[test]
    fn missing_field_fails_as_unparseable_date() {
        let err = handle_body(&ScoringPolicy::default(), r#"{"actual_date": "2020-06-01"}"#)
            .expect_err("missing guess should fail");
        match err {
            DateScoreError::InvalidDate(parse) => {
                assert_eq!(parse.field, DateField::Guess);
                assert_eq!(parse.input, "");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_body_is_an_invalid_request() {
        let err = handle_body(&ScoringPolicy::default(), "{not json")
            .expect_err("malformed body should fail");
        assert!(matches!(err, DateScoreError::InvalidRequest(_)));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn error_envelope_names_the_field() {
        let err = handle_body(
            &ScoringPolicy::default(),
            r#"{"actual_date": "last spring", "guess_date": "2020-01-01"}"#,
        )
        .expect_err("bad actual date should fail");
        let value = serde_json::to_value(error_response(&err)).expect("error should serialize");
        assert_eq!(value["status"], "error");
        let message = value["message"].as_str().expect("message should be a string");
        assert!(message.starts_with("Error calculating score:"));
        assert!(message.contains("actual_date"));
    }

    #[test]
    fn configured_policy_flows_into_envelope() {
        let policy = ScoringPolicy {
            full_points_threshold_days: 30.0,
            zero_points_threshold_days: 130.0,
            max_points: 10,
        };
        let response = handle_body(
            &policy,
            r#"{"actual_date": "2023-01-01", "guess_date": "2023-03-22"}"#,
        )
        .expect("request should score");
        assert_eq!(response.difference_days, 80);
        assert_eq!(response.score, 5);
        assert_eq!(response.max_possible, 10);
        assert_eq!(response.scoring_details.full_points_threshold_days, 30.0);
    }
}
