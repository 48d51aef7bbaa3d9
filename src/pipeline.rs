// Judge pipeline
// Decides which extractors to run for the inputs present, assembles the
// immutable feature bag, and fans it out to the three scorers. Extractors
// and scorers are mutually independent; running them in sequence is the
// reference behavior and nothing here depends on ordering.

use std::path::Path;

use crate::constants::{DEFAULT_FPS_SAMPLE, DEFAULT_MAX_FRAMES};
use crate::error::{JudgeError, Result};
use crate::features::{audio, text, video, FeatureBag};
use crate::scoring::{
    audience, origin, virality, Explanations, JudgeOutput, OriginPrediction,
};

/// Knobs for a single judge invocation.
#[derive(Debug, Clone)]
pub struct JudgeOptions {
    /// Frames per second to sample from a video. Must be > 0.
    pub fps_sample: f64,
    /// Hard cap on decoded frames, regardless of source length.
    pub max_frames: usize,
    /// Attach the raw feature bag to the output.
    pub include_debug: bool,
}

impl Default for JudgeOptions {
    fn default() -> Self {
        Self {
            fps_sample: DEFAULT_FPS_SAMPLE,
            max_frames: DEFAULT_MAX_FRAMES,
            include_debug: false,
        }
    }
}

/// Judge a piece of content: origin prediction, virality score, and
/// audience distribution, each with an explanation.
///
/// Runs whichever extractors have inputs. A transcript rides along with
/// the video pathway: it feeds the audio features and, when readable, is
/// run through the text extractor as an additional category that stands
/// in for text when none was supplied.
pub fn judge(
    text_input: Option<&str>,
    video_path: Option<&Path>,
    transcript_path: Option<&Path>,
    options: &JudgeOptions,
) -> Result<JudgeOutput> {
    if video_path.is_some() && options.fps_sample <= 0.0 {
        return Err(JudgeError::InvalidSamplingRate);
    }

    let mut bag = FeatureBag::default();

    if let Some(t) = text_input {
        bag.text = Some(text::extract_text_features(t));
    }

    if let Some(path) = video_path {
        bag.video = Some(video::extract_video_features(
            path,
            options.fps_sample,
            options.max_frames,
        )?);
        bag.audio = Some(audio::extract_audio_features(path, transcript_path));

        if let Some(tp) = transcript_path {
            match std::fs::read(tp) {
                Ok(bytes) => {
                    let transcript = String::from_utf8_lossy(&bytes);
                    bag.transcript_text = Some(text::extract_text_features(&transcript));
                }
                Err(e) => {
                    log::debug!("transcript unreadable at {}: {}", tp.display(), e);
                }
            }
        }
    }

    Ok(assemble_output(bag, options.include_debug))
}

fn assemble_output(bag: FeatureBag, include_debug: bool) -> JudgeOutput {
    let (label, confidence, origin_expl) = origin::score_origin(&bag);
    let (virality_score, virality_expl) = virality::score_virality(&bag);
    let (distribution_analysis, audience_expl) = audience::score_audiences(&bag);

    JudgeOutput {
        origin_prediction: OriginPrediction { label, confidence },
        virality_score,
        distribution_analysis,
        explanations: Explanations {
            origin_prediction: origin_expl,
            virality_score: virality_expl,
            distribution_analysis: audience_expl,
        },
        debug: include_debug.then_some(bag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_only_judgment() {
        let out = judge(Some("Some everyday writing."), None, None, &JudgeOptions::default())
            .unwrap();
        assert!(out.virality_score <= 100);
        assert!(out.origin_prediction.confidence >= 0.5);
        assert!(out.origin_prediction.confidence <= 1.0);
        assert!(out.distribution_analysis.len() <= 4);
        assert!(out.debug.is_none());
    }

    #[test]
    fn test_debug_bag_attached_on_request() {
        let options = JudgeOptions {
            include_debug: true,
            ..Default::default()
        };
        let out = judge(Some("hello"), None, None, &options).unwrap();
        let bag = out.debug.expect("debug bag");
        assert!(bag.text.is_some());
        assert!(bag.video.is_none());
        assert!(bag.audio.is_none());
    }

    #[test]
    fn test_zero_sampling_rate_rejected_before_decoding() {
        let options = JudgeOptions {
            fps_sample: 0.0,
            ..Default::default()
        };
        // The video path does not even exist; validation must come first
        let err = judge(None, Some(Path::new("clip.mp4")), None, &options).unwrap_err();
        assert_eq!(err.to_string(), "sampling rate must be greater than 0");
    }

    #[test]
    fn test_zero_sampling_rate_ignored_for_text_only() {
        let options = JudgeOptions {
            fps_sample: 0.0,
            ..Default::default()
        };
        assert!(judge(Some("text only"), None, None, &options).is_ok());
    }

    #[test]
    fn test_idempotence() {
        let text = "Here are 3 focus tips: 1. sleep 2. plan 3. review. Like and subscribe!";
        let options = JudgeOptions {
            include_debug: true,
            ..Default::default()
        };
        let a = judge(Some(text), None, None, &options).unwrap();
        let b = judge(Some(text), None, None, &options).unwrap();

        assert_eq!(a.origin_prediction.label, b.origin_prediction.label);
        assert_eq!(a.origin_prediction.confidence, b.origin_prediction.confidence);
        assert_eq!(a.virality_score, b.virality_score);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
