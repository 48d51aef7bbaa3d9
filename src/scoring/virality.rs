// Virality scoring
//
// Baseline plus additive/subtractive adjustments, each gated on the
// feature category being present. The output is an integer in [0,100]
// with the fired rules concatenated as the explanation.

use crate::constants::{
    VIRALITY_BASELINE, VIRALITY_BRIGHTNESS_BONUS, VIRALITY_BRIGHTNESS_MIN,
    VIRALITY_CTA_BONUS, VIRALITY_HOOK_BONUS, VIRALITY_HOOK_PHRASES,
    VIRALITY_LISTICLE_BONUS, VIRALITY_LONG_FORM_PENALTY, VIRALITY_LONG_FORM_S,
    VIRALITY_MOTION_BONUS, VIRALITY_MOTION_HIGH, VIRALITY_MOTION_LOW,
    VIRALITY_OVERLAY_BONUS, VIRALITY_OVERLAY_MIN, VIRALITY_REPETITION_BONUS,
    VIRALITY_REPETITION_MIN, VIRALITY_SHORT_FORM_BONUS, VIRALITY_SHORT_FORM_MAX_S,
    VIRALITY_SHORT_FORM_MIN_S, VIRALITY_SHORT_TEXT_BONUS, VIRALITY_SHORT_TEXT_WORDS,
    VIRALITY_STATIC_PENALTY,
};
use crate::features::FeatureBag;

/// Score the virality potential of the content in the bag.
/// Returns (score in [0,100], explanation).
pub fn score_virality(bag: &FeatureBag) -> (u32, String) {
    let mut score = VIRALITY_BASELINE;
    let mut reasons: Vec<&'static str> = Vec::new();

    if let Some(t) = bag.scoring_text() {
        let preview = t.raw_preview.to_lowercase();
        let hook = VIRALITY_HOOK_PHRASES.iter().any(|p| preview.contains(p));

        if t.has_listicles != 0.0 {
            score += VIRALITY_LISTICLE_BONUS;
            reasons.push("structured/list format increases skimmability");
        }
        if t.has_marketing_cta != 0.0 {
            score += VIRALITY_CTA_BONUS;
            reasons.push("explicit CTA encourages engagement");
        }
        if t.n_words != 0 && t.n_words < VIRALITY_SHORT_TEXT_WORDS {
            score += VIRALITY_SHORT_TEXT_BONUS;
            reasons.push("relatively short text is more shareable");
        }
        if t.repetition_score > VIRALITY_REPETITION_MIN {
            score += VIRALITY_REPETITION_BONUS;
            reasons.push("repetition can increase memorability (to a point)");
        }
        if hook {
            score += VIRALITY_HOOK_BONUS;
            reasons.push("strong hook increases stop-scroll potential");
        }
    }

    if let Some(v) = bag.video.as_ref() {
        if v.duration_s != 0.0 {
            if v.duration_s >= VIRALITY_SHORT_FORM_MIN_S
                && v.duration_s <= VIRALITY_SHORT_FORM_MAX_S
            {
                score += VIRALITY_SHORT_FORM_BONUS;
                reasons.push("short-form length fits social feeds");
            } else if v.duration_s > VIRALITY_LONG_FORM_S {
                score -= VIRALITY_LONG_FORM_PENALTY;
                reasons.push("longer duration reduces completion rates");
            }
        }

        if v.text_overlay_likelihood > VIRALITY_OVERLAY_MIN {
            score += VIRALITY_OVERLAY_BONUS;
            reasons.push("on-screen text can improve retention without audio");
        }

        if v.motion_score > VIRALITY_MOTION_HIGH {
            score += VIRALITY_MOTION_BONUS;
            reasons.push("moderate motion keeps attention");
        } else if v.motion_score < VIRALITY_MOTION_LOW {
            score -= VIRALITY_STATIC_PENALTY;
            reasons.push("very low motion risks looking static");
        }

        if v.avg_brightness > VIRALITY_BRIGHTNESS_MIN {
            score += VIRALITY_BRIGHTNESS_BONUS;
            reasons.push("bright visuals tend to perform better on mobile");
        }
    }

    let score = score.clamp(0.0, 100.0) as u32;
    let explanation = if reasons.is_empty() {
        "No strong virality boosters detected; baseline score applied.".to_string()
    } else {
        reasons.join("; ")
    };

    (score, explanation)
}
