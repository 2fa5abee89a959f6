//! Symptom prediction endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::catalog::{MatchOutcome, MatchResult};

/// Message shown when no record overlaps the submitted symptoms.
pub const NO_MATCH_MESSAGE: &str = "No related diseases found. Please refine your input.";

#[derive(Deserialize)]
pub struct PredictRequest {
    pub symptoms: String,
}

/// Wire shape for prediction results. `outcome` tags the two cases so
/// clients never confuse an empty result list with a no-match answer.
#[derive(Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PredictResponse {
    Matches { results: Vec<MatchResult> },
    NoMatch { message: &'static str },
}

/// `POST /api/predict` matches free-text symptoms against the catalog.
///
/// Unknown or empty input is a normal no-match answer, never an error.
pub async fn predict(
    State(ctx): State<ApiContext>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let tokens: Vec<&str> = request.symptoms.split(',').collect();

    let response = match ctx.catalog.match_symptoms(&tokens) {
        MatchOutcome::Matches(results) => PredictResponse::Matches { results },
        MatchOutcome::NoMatch => PredictResponse::NoMatch {
            message: NO_MATCH_MESSAGE,
        },
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_serialize_with_outcome_tag() {
        let response = PredictResponse::Matches {
            results: vec![MatchResult {
                disease: "Common Cold".into(),
                treatment: "Ginger tea with honey".into(),
                matched_symptoms: "cough, fever".into(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["outcome"], "matches");
        assert_eq!(json["results"][0]["disease"], "Common Cold");
        assert_eq!(json["results"][0]["matched_symptoms"], "cough, fever");
    }

    #[test]
    fn no_match_serializes_with_message() {
        let response = PredictResponse::NoMatch {
            message: NO_MATCH_MESSAGE,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["outcome"], "no_match");
        assert_eq!(
            json["message"],
            "No related diseases found. Please refine your input."
        );
        assert!(json.get("results").is_none());
    }
}
