//! Request and response payloads for the scoring API.

use hearth_score::{Factor, RegionEstimate, ScoreSet};
use serde::{Deserialize, Serialize};

use hearth_data::ZipCode;

/// Body of a `POST /score` request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// Postal code of the region to score.
    pub zipcode: ZipCode,
}

/// Body of a `POST /score` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    /// Aggregated model scores for the region. A "no usable data"
    /// outcome carries zeroed model scores and `average_hai == -1`.
    pub scores: ScoreSet,

    /// Top contributing factors, ranked by absolute averaged
    /// magnitude; empty when no data was available.
    pub key_components: Vec<Factor>,
}

impl From<RegionEstimate> for ScoreResponse {
    fn from(estimate: RegionEstimate) -> Self {
        let scores = estimate.scores();
        let key_components = match estimate {
            RegionEstimate::Scored { key_factors, .. } => key_factors,
            RegionEstimate::NoData => Vec::new(),
        };
        Self {
            scores,
            key_components,
        }
    }
}

/// Body of a `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the service is up.
    pub status: String,

    /// Running crate version.
    pub version: String,
}

impl HealthResponse {
    /// Health payload for the running build.
    pub fn current() -> Self {
        Self {
            status: "ok".to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_score::Influence;

    #[test]
    fn test_scored_estimate_serialization() {
        let estimate = RegionEstimate::Scored {
            scores: ScoreSet::from_model_scores(0.7, 0.6, 0.65),
            key_factors: vec![Factor {
                name: "tax_rate".to_string(),
                description: "Effective property tax rate.".to_string(),
                influence: Influence::Negative,
                score: 3.4,
            }],
        };

        let json = serde_json::to_value(ScoreResponse::from(estimate)).unwrap();
        assert_eq!(json["scores"]["linear_hai"], 0.7);
        assert_eq!(json["scores"]["nn_hai"], 0.65);
        assert_eq!(json["key_components"][0]["name"], "tax_rate");
        assert_eq!(json["key_components"][0]["influence"], "negative");
        assert_eq!(json["key_components"][0]["score"], 3.4);
    }

    #[test]
    fn test_no_data_estimate_serializes_sentinel() {
        let json = serde_json::to_value(ScoreResponse::from(RegionEstimate::NoData)).unwrap();
        assert_eq!(json["scores"]["linear_hai"], 0.0);
        assert_eq!(json["scores"]["average_hai"], -1.0);
        assert_eq!(json["key_components"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_request_round_trip() {
        let request: ScoreRequest = serde_json::from_str(r#"{"zipcode": 32246}"#).unwrap();
        assert_eq!(request.zipcode, 32246);
    }
}
