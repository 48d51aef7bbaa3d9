// Audience scoring
//
// Lightweight audience inference over a fixed candidate segment set:
// format cues (length, overlays, list structure, CTA language) bump
// segment weights from a uniform prior, the weights are proportionally
// normalized, and the top segments are returned with their notes.

use crate::constants::{
    AUDIENCE_BUMP_CTA_CREATORS, AUDIENCE_BUMP_LISTICLE_PRODUCTIVITY,
    AUDIENCE_BUMP_LISTICLE_STUDENTS, AUDIENCE_BUMP_OVERLAY_CREATORS,
    AUDIENCE_BUMP_OVERLAY_PRODUCTIVITY, AUDIENCE_BUMP_READABILITY_GENERAL,
    AUDIENCE_BUMP_SHORT_VIDEO_GENERAL, AUDIENCE_OVERLAY_MIN, AUDIENCE_PRIOR,
    AUDIENCE_READABILITY_MIN, AUDIENCE_SEGMENTS, AUDIENCE_SHORT_VIDEO_MAX_S,
    AUDIENCE_TOP_K,
};
use crate::features::FeatureBag;
use crate::scoring::AudienceSegment;

const FALLBACK_REASON: &str = "broad fit based on content format signals";

const EXPLANATION: &str = "Audience mapping uses simple format cues (length, \
overlays, list structure, CTA language) rather than topic modeling.";

/// A candidate segment with its running weight and contributing notes.
#[derive(Debug, Clone)]
pub struct SegmentWeight {
    pub name: &'static str,
    pub weight: f64,
    pub notes: Vec<&'static str>,
}

/// Compute the normalized weight distribution over the full candidate
/// set. Weights sum to 1 here, before any truncation.
pub fn segment_weights(bag: &FeatureBag) -> Vec<SegmentWeight> {
    let mut segs: Vec<SegmentWeight> = AUDIENCE_SEGMENTS
        .iter()
        .map(|&name| SegmentWeight {
            name,
            weight: AUDIENCE_PRIOR,
            notes: Vec::new(),
        })
        .collect();

    if let Some(v) = bag.video.as_ref() {
        if v.duration_s != 0.0 && v.duration_s <= AUDIENCE_SHORT_VIDEO_MAX_S {
            bump(
                &mut segs,
                "General social feed audience",
                AUDIENCE_BUMP_SHORT_VIDEO_GENERAL,
                "short-form video length fits feed consumption",
            );
        }
        if v.text_overlay_likelihood > AUDIENCE_OVERLAY_MIN {
            bump(
                &mut segs,
                "Creators & marketers",
                AUDIENCE_BUMP_OVERLAY_CREATORS,
                "text overlays are common in creator/editing styles",
            );
            bump(
                &mut segs,
                "Productivity/self-improvement",
                AUDIENCE_BUMP_OVERLAY_PRODUCTIVITY,
                "overlay-driven tips format is common in advice content",
            );
        }
    }

    if let Some(t) = bag.scoring_text() {
        if t.has_listicles != 0.0 {
            bump(
                &mut segs,
                "Students/learners",
                AUDIENCE_BUMP_LISTICLE_STUDENTS,
                "structured bullets support quick learning",
            );
            bump(
                &mut segs,
                "Productivity/self-improvement",
                AUDIENCE_BUMP_LISTICLE_PRODUCTIVITY,
                "listicles map well to actionable tips",
            );
        }
        if t.has_marketing_cta != 0.0 {
            bump(
                &mut segs,
                "Creators & marketers",
                AUDIENCE_BUMP_CTA_CREATORS,
                "CTA language is typical of creator growth loops",
            );
        }
        if t.readability_flesch > AUDIENCE_READABILITY_MIN {
            bump(
                &mut segs,
                "General social feed audience",
                AUDIENCE_BUMP_READABILITY_GENERAL,
                "high readability broadens audience",
            );
        }
    }

    let total: f64 = segs.iter().map(|s| s.weight).sum();
    for s in &mut segs {
        s.weight /= total;
    }
    segs
}

fn bump(segs: &mut [SegmentWeight], name: &str, amount: f64, note: &'static str) {
    if let Some(s) = segs.iter_mut().find(|s| s.name == name) {
        s.weight += amount;
        s.notes.push(note);
    }
}

/// Score the likely audience segments for the content in the bag.
/// Returns (top segments in descending likelihood, explanation).
pub fn score_audiences(bag: &FeatureBag) -> (Vec<AudienceSegment>, String) {
    let mut segs = segment_weights(bag);

    // Stable sort keeps the declaration order for tied weights
    segs.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    segs.truncate(AUDIENCE_TOP_K);

    let result = segs
        .into_iter()
        .map(|s| AudienceSegment {
            segment: s.name.to_string(),
            likelihood: s.weight.clamp(0.0, 1.0),
            why: if s.notes.is_empty() {
                FALLBACK_REASON.to_string()
            } else {
                s.notes.join("; ")
            },
        })
        .collect();

    (result, EXPLANATION.to_string())
}
