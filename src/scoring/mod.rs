// Scoring engine
// Three independent heuristic scorers over a shared feature bag, plus the
// structured output types the judge pipeline assembles.

pub mod audience;
pub mod origin;
pub mod virality;


use serde::{Deserialize, Serialize, Serializer};

use crate::features::FeatureBag;

/// Predicted content origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginLabel {
    AiGenerated,
    HumanGenerated,
}

/// Origin decision with a threshold-distance confidence. The confidence
/// is symmetric around the decision threshold and lives in [0.5, 1.0];
/// it is not a calibrated probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginPrediction {
    pub label: OriginLabel,
    #[serde(serialize_with = "round3")]
    pub confidence: f64,
}

/// A candidate audience segment with its share of the normalized weight
/// distribution and the notes that justified it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceSegment {
    pub segment: String,
    pub likelihood: f64,
    pub why: String,
}

/// One explanation string per scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanations {
    pub origin_prediction: String,
    pub virality_score: String,
    pub distribution_analysis: String,
}

/// The full structured judgment for one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct JudgeOutput {
    pub origin_prediction: OriginPrediction,
    pub virality_score: u32,
    pub distribution_analysis: Vec<AudienceSegment>,
    pub explanations: Explanations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<FeatureBag>,
}

/// Confidence is rounded to 3 decimals at the serialization boundary so
/// in-process consumers keep full precision.
fn round3<S: Serializer>(v: &f64, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64((v * 1000.0).round() / 1000.0)
}
