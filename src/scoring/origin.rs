// Origin scoring: AI-generated vs human-generated
//
// Accumulates weighted contributions for whichever feature categories are
// present, compares against a fixed threshold, and explains every cue
// that fired. The weights and threshold are hand-tuned heuristics with no
// calibration dataset behind them; they are reproduced as-is, not tuned.

use crate::constants::{
    ORIGIN_CONFIDENCE_SLOPE, ORIGIN_FLESCH_BAND_HIGH, ORIGIN_FLESCH_BAND_LOW,
    ORIGIN_MOTION_LOW, ORIGIN_REPETITION_NOTE_MIN, ORIGIN_SHARPNESS_HIGH,
    ORIGIN_SHORT_DURATION_S, ORIGIN_THRESHOLD, ORIGIN_TTR_LOW,
    ORIGIN_W_AI_DISCLAIMER, ORIGIN_W_LISTICLE, ORIGIN_W_LOW_DIVERSITY,
    ORIGIN_W_LOW_MOTION, ORIGIN_W_OVERLAY, ORIGIN_W_READABILITY_BAND,
    ORIGIN_W_REPETITION, ORIGIN_W_SHARP_FRAMES, ORIGIN_W_SHORT_DURATION,
};
use crate::features::FeatureBag;
use crate::scoring::OriginLabel;

/// Score the origin of the content in the bag.
/// Returns (label, confidence in [0.5, 1.0], explanation).
pub fn score_origin(bag: &FeatureBag) -> (OriginLabel, f64, String) {
    let mut score = 0.0;
    let mut notes: Vec<&'static str> = Vec::new();

    if let Some(t) = bag.scoring_text() {
        score += ORIGIN_W_REPETITION * t.repetition_score;
        score += ORIGIN_W_LISTICLE * t.has_listicles;
        score += ORIGIN_W_AI_DISCLAIMER * t.has_disclaimer_ai;

        // Low lexical diversity can indicate templated text
        if t.type_token_ratio != 0.0 && t.type_token_ratio < ORIGIN_TTR_LOW {
            score += ORIGIN_W_LOW_DIVERSITY;
            notes.push("low lexical diversity");
        }

        // Very "smooth" readability can correlate with generic AI copy
        if t.readability_flesch >= ORIGIN_FLESCH_BAND_LOW
            && t.readability_flesch <= ORIGIN_FLESCH_BAND_HIGH
        {
            score += ORIGIN_W_READABILITY_BAND;
            notes.push("mid-high readability band");
        }

        if t.repetition_score > ORIGIN_REPETITION_NOTE_MIN {
            notes.push("high phrase repetition");
        }
        if t.has_listicles != 0.0 {
            notes.push("listicle/structured bullets");
        }
        if t.has_disclaimer_ai != 0.0 {
            notes.push("explicit AI disclaimer");
        }
    }

    if let Some(v) = bag.video.as_ref() {
        // Low motion + very sharp + heavy overlay resembles templated short clips
        if v.motion_score < ORIGIN_MOTION_LOW {
            score += ORIGIN_W_LOW_MOTION;
            notes.push("low motion");
        }
        if v.sharpness_score > ORIGIN_SHARPNESS_HIGH {
            score += ORIGIN_W_SHARP_FRAMES;
            notes.push("very sharp frames");
        }
        score += ORIGIN_W_OVERLAY * v.text_overlay_likelihood;

        if v.duration_s != 0.0 && v.duration_s < ORIGIN_SHORT_DURATION_S {
            score += ORIGIN_W_SHORT_DURATION;
            notes.push("very short duration");
        }
    }

    let label = if score >= ORIGIN_THRESHOLD {
        OriginLabel::AiGenerated
    } else {
        OriginLabel::HumanGenerated
    };

    // Confidence from distance to the threshold: near => ~0.5, far => ~1.0
    let distance = (score - ORIGIN_THRESHOLD).abs();
    let confidence = (0.5 + distance / ORIGIN_CONFIDENCE_SLOPE).clamp(0.5, 1.0);

    let explanation = format!(
        "Origin heuristic score={:.2}. Signals: {}",
        score,
        if notes.is_empty() {
            "no strong AI cues detected".to_string()
        } else {
            notes.join(", ")
        }
    );

    (label, confidence, explanation)
}
