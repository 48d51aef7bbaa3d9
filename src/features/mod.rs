// Feature extraction module
// One extractor per input category; the bag is the hand-off point between
// extraction and scoring.

pub mod audio;
pub mod text;
pub mod video;

use serde::Serialize;

pub use audio::AudioFeatures;
pub use text::TextFeatures;
pub use video::VideoFeatures;

/// Per-invocation container of extracted features, one optional slot per
/// input category. A `None` slot means "no signal" and scorers skip it;
/// it is never a stand-in for zero. Built once by the judge pipeline and
/// read-only afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeatureBag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_text: Option<TextFeatures>,
}

impl FeatureBag {
    /// Text features to score against: explicit text wins, transcript-
    /// derived text fills in when no text was supplied. Scorers call this
    /// instead of re-implementing the substitution.
    pub fn scoring_text(&self) -> Option<&TextFeatures> {
        self.text.as_ref().or(self.transcript_text.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_text_prefers_explicit_text() {
        let bag = FeatureBag {
            text: Some(text::extract_text_features("main text")),
            transcript_text: Some(text::extract_text_features("transcript text here")),
            ..Default::default()
        };
        assert_eq!(bag.scoring_text().unwrap().n_words, 2);
    }

    #[test]
    fn test_scoring_text_falls_back_to_transcript() {
        let bag = FeatureBag {
            transcript_text: Some(text::extract_text_features("transcript text here")),
            ..Default::default()
        };
        assert_eq!(bag.scoring_text().unwrap().n_words, 3);
    }

    #[test]
    fn test_scoring_text_absent() {
        assert!(FeatureBag::default().scoring_text().is_none());
    }
}
