// Content Judge Constants
// Scorer weights and thresholds are hand-tuned heuristics. Changing any of
// them changes the judgment contract; update the tests alongside.

// ----- Sampling defaults -----

pub const DEFAULT_FPS_SAMPLE: f64 = 1.0;
pub const DEFAULT_MAX_FRAMES: usize = 60;

// Native frame rate assumed when the probe reports none
pub const FALLBACK_NATIVE_FPS: f64 = 30.0;

// ----- Text extraction -----

pub const PREVIEW_CHARS: usize = 300;
pub const PUNCTUATION_CHARS: &str = ".,!?;:-";
pub const SYLLABLE_VOWELS: &str = "aeiouy";

// Flesch reading-ease needs a minimum of material to mean anything
pub const FLESCH_MIN_WORDS: usize = 5;
pub const FLESCH_BASE: f64 = 206.835;
pub const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
pub const FLESCH_SYLLABLE_WEIGHT: f64 = 84.6;

// Pattern flags. The phrase lists are part of the output contract.
pub const WORD_PATTERN: &str = r"\b[\w']+\b";
pub const LISTICLE_PATTERN: &str = r"\b(1\.|2\.|3\.|\- |\* )";
pub const CTA_PATTERN: &str = r"\b(like and subscribe|comment below|smash that|follow for more)\b";
pub const AI_DISCLAIMER_PATTERN: &str = r"\b(as an ai|i am an ai|language model)\b";

// ----- Video extraction -----

// Overlay heuristic: binary edge density in the bottom band of the frame
pub const OVERLAY_BAND_START_FRACTION: f64 = 0.80;
pub const OVERLAY_EDGE_LOW: f64 = 80.0;
pub const OVERLAY_EDGE_HIGH: f64 = 160.0;
pub const OVERLAY_GAIN: f64 = 5.0;

// ----- Audio probe -----

pub const AUDIO_PROBE_CHANNELS: &str = "1";
pub const AUDIO_PROBE_SAMPLE_RATE: &str = "16000";

// ----- Origin scorer -----

pub const ORIGIN_THRESHOLD: f64 = 1.3;
// Confidence = clamp(0.5 + distance_from_threshold / slope, 0.5, 1.0)
pub const ORIGIN_CONFIDENCE_SLOPE: f64 = 3.0;

pub const ORIGIN_W_REPETITION: f64 = 1.6;
pub const ORIGIN_W_LISTICLE: f64 = 0.6;
pub const ORIGIN_W_AI_DISCLAIMER: f64 = 2.0;
pub const ORIGIN_W_LOW_DIVERSITY: f64 = 0.6;
pub const ORIGIN_W_READABILITY_BAND: f64 = 0.4;
pub const ORIGIN_W_LOW_MOTION: f64 = 0.4;
pub const ORIGIN_W_SHARP_FRAMES: f64 = 0.4;
pub const ORIGIN_W_OVERLAY: f64 = 0.6;
pub const ORIGIN_W_SHORT_DURATION: f64 = 0.2;

pub const ORIGIN_TTR_LOW: f64 = 0.35;
pub const ORIGIN_FLESCH_BAND_LOW: f64 = 45.0;
pub const ORIGIN_FLESCH_BAND_HIGH: f64 = 80.0;
pub const ORIGIN_REPETITION_NOTE_MIN: f64 = 0.20;
pub const ORIGIN_MOTION_LOW: f64 = 6.0;
pub const ORIGIN_SHARPNESS_HIGH: f64 = 250.0;
pub const ORIGIN_SHORT_DURATION_S: f64 = 12.0;

// ----- Virality scorer -----

pub const VIRALITY_BASELINE: f64 = 30.0;

pub const VIRALITY_LISTICLE_BONUS: f64 = 10.0;
pub const VIRALITY_CTA_BONUS: f64 = 8.0;
pub const VIRALITY_SHORT_TEXT_BONUS: f64 = 6.0;
pub const VIRALITY_REPETITION_BONUS: f64 = 3.0;
pub const VIRALITY_HOOK_BONUS: f64 = 5.0;
pub const VIRALITY_SHORT_FORM_BONUS: f64 = 15.0;
pub const VIRALITY_LONG_FORM_PENALTY: f64 = 8.0;
pub const VIRALITY_OVERLAY_BONUS: f64 = 10.0;
pub const VIRALITY_MOTION_BONUS: f64 = 6.0;
pub const VIRALITY_STATIC_PENALTY: f64 = 4.0;
pub const VIRALITY_BRIGHTNESS_BONUS: f64 = 3.0;

pub const VIRALITY_SHORT_TEXT_WORDS: usize = 220;
pub const VIRALITY_REPETITION_MIN: f64 = 0.25;
pub const VIRALITY_SHORT_FORM_MIN_S: f64 = 7.0;
pub const VIRALITY_SHORT_FORM_MAX_S: f64 = 35.0;
pub const VIRALITY_LONG_FORM_S: f64 = 90.0;
pub const VIRALITY_OVERLAY_MIN: f64 = 0.35;
pub const VIRALITY_MOTION_HIGH: f64 = 8.0;
pub const VIRALITY_MOTION_LOW: f64 = 3.0;
pub const VIRALITY_BRIGHTNESS_MIN: f64 = 130.0;

// Hook phrases checked against the lowercased text preview. Both apostrophe
// forms of "you're" are listed because user-typed and editor-typed text differ.
pub const VIRALITY_HOOK_PHRASES: [&str; 5] = [
    "struggling",
    "here are",
    "stop scrolling",
    "you're not alone",
    "you\u{2019}re not alone",
];

// ----- Audience scorer -----

pub const AUDIENCE_SEGMENTS: [&str; 6] = [
    "AI/tech enthusiasts",
    "Productivity/self-improvement",
    "Creators & marketers",
    "Students/learners",
    "General social feed audience",
    "Niche hobby communities",
];

pub const AUDIENCE_PRIOR: f64 = 0.15;
pub const AUDIENCE_TOP_K: usize = 4;

pub const AUDIENCE_SHORT_VIDEO_MAX_S: f64 = 40.0;
pub const AUDIENCE_OVERLAY_MIN: f64 = 0.35;
pub const AUDIENCE_READABILITY_MIN: f64 = 55.0;

pub const AUDIENCE_BUMP_SHORT_VIDEO_GENERAL: f64 = 0.20;
pub const AUDIENCE_BUMP_OVERLAY_CREATORS: f64 = 0.18;
pub const AUDIENCE_BUMP_OVERLAY_PRODUCTIVITY: f64 = 0.08;
pub const AUDIENCE_BUMP_LISTICLE_STUDENTS: f64 = 0.12;
pub const AUDIENCE_BUMP_LISTICLE_PRODUCTIVITY: f64 = 0.10;
pub const AUDIENCE_BUMP_CTA_CREATORS: f64 = 0.15;
pub const AUDIENCE_BUMP_READABILITY_GENERAL: f64 = 0.10;
