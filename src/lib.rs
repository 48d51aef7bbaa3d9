// Content Judge - Library Entry Point
//
// Heuristic judgments over text and short video: AI-vs-human origin,
// a 0-100 virality score, and a ranked audience distribution. Feature
// extraction and scoring are deterministic; no models, no persistence.

pub mod constants;
pub mod decode;
pub mod error;
pub mod features;
pub mod metadata;
pub mod pipeline;
pub mod scoring;
pub mod tools;

pub use error::{JudgeError, Result};
pub use features::FeatureBag;
pub use pipeline::{judge, JudgeOptions};
pub use scoring::{AudienceSegment, JudgeOutput, OriginLabel, OriginPrediction};
