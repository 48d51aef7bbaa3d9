// Text feature extraction
// Lexical, structural, and stylistic metrics over a raw text string.
// Everything derives from one case-folded pass plus a sentence split;
// the pattern lists feed the scorers and are part of the output contract.

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AI_DISCLAIMER_PATTERN, CTA_PATTERN, FLESCH_BASE, FLESCH_MIN_WORDS,
    FLESCH_SENTENCE_WEIGHT, FLESCH_SYLLABLE_WEIGHT, LISTICLE_PATTERN,
    PREVIEW_CHARS, PUNCTUATION_CHARS, SYLLABLE_VOWELS, WORD_PATTERN,
};

/// Lexical/structural metrics for a piece of text. Rates and ratios are
/// in [0,1]; `readability_flesch` is unbounded (typically 0-100); counts
/// are plain totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextFeatures {
    pub n_chars: usize,
    pub n_words: usize,
    pub avg_word_len: f64,
    pub type_token_ratio: f64,
    pub sentence_count: usize,
    pub avg_sentence_len: f64,
    pub punctuation_rate: f64,
    pub repetition_score: f64,
    pub readability_flesch: f64,
    pub has_listicles: f64,
    pub has_marketing_cta: f64,
    pub has_disclaimer_ai: f64,
    pub raw_preview: String,
}

/// Extract all text features in one pass. Deterministic; an empty string
/// produces all-zero metrics and no flags.
pub fn extract_text_features(text: &str) -> TextFeatures {
    let word_re = Regex::new(WORD_PATTERN).unwrap();
    let lowered = text.to_lowercase();

    let n_chars = text.chars().count();
    let words: Vec<&str> = word_re.find_iter(&lowered).map(|m| m.as_str()).collect();
    let n_words = words.len();

    let avg_word_len = if n_words > 0 {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / n_words as f64
    } else {
        0.0
    };

    let unique: HashSet<&str> = words.iter().copied().collect();
    let type_token_ratio = if n_words > 0 {
        unique.len() as f64 / n_words as f64
    } else {
        0.0
    };

    let sentences = split_sentences(text);
    let sentence_count = sentences.len();
    let avg_sentence_len = if sentence_count > 0 {
        sentences
            .iter()
            .map(|s| word_re.find_iter(s).count())
            .sum::<usize>() as f64
            / sentence_count as f64
    } else {
        0.0
    };

    let punct = text.chars().filter(|c| PUNCTUATION_CHARS.contains(*c)).count();
    let punctuation_rate = if n_chars > 0 {
        punct as f64 / n_chars as f64
    } else {
        0.0
    };

    let repetition_score = bigram_repetition(&words);
    let readability_flesch = flesch_reading_ease(&words, sentence_count);

    let has_listicles = flag(Regex::new(LISTICLE_PATTERN).unwrap().is_match(text));
    let has_marketing_cta = flag(Regex::new(CTA_PATTERN).unwrap().is_match(&lowered));
    let has_disclaimer_ai =
        flag(Regex::new(AI_DISCLAIMER_PATTERN).unwrap().is_match(&lowered));

    TextFeatures {
        n_chars,
        n_words,
        avg_word_len,
        type_token_ratio,
        sentence_count,
        avg_sentence_len,
        punctuation_rate,
        repetition_score,
        readability_flesch,
        has_listicles,
        has_marketing_cta,
        has_disclaimer_ai,
        raw_preview: text.chars().take(PREVIEW_CHARS).collect(),
    }
}

fn flag(matched: bool) -> f64 {
    if matched {
        1.0
    } else {
        0.0
    }
}

/// Split on whitespace that immediately follows `.`, `!`, or `?`,
/// discarding empty fragments.
fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut parts = Vec::new();
    let mut start = 0usize;
    let mut prev: Option<char> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if c.is_whitespace() && matches!(prev, Some('.') | Some('!') | Some('?')) {
            let frag = &text[start..i];
            if !frag.is_empty() {
                parts.push(frag);
            }
            // Skip the rest of the whitespace run
            let mut next_start = i + c.len_utf8();
            while let Some(&(k, c2)) = iter.peek() {
                if c2.is_whitespace() {
                    next_start = k + c2.len_utf8();
                    iter.next();
                } else {
                    next_start = k;
                    break;
                }
            }
            start = next_start;
            prev = None;
            continue;
        }
        prev = Some(c);
    }

    if start < text.len() {
        parts.push(&text[start..]);
    }
    parts
}

/// Offline heuristic syllable counter: vowel runs over the alphabetic-only
/// lowercase form, minus a trailing silent 'e', floored at 1. Tokens that
/// strip to nothing (digits, symbols) count 0.
fn count_syllables(word: &str) -> usize {
    let w: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if w.is_empty() {
        return 0;
    }

    let mut syllables = 0usize;
    let mut prev_is_vowel = false;
    for ch in w.chars() {
        let is_vowel = SYLLABLE_VOWELS.contains(ch);
        if is_vowel && !prev_is_vowel {
            syllables += 1;
        }
        prev_is_vowel = is_vowel;
    }

    if w.ends_with('e') && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}

/// Flesch Reading Ease:
/// 206.835 - 1.015*(words/sentences) - 84.6*(syllables/words)
/// Defined as 0 below the minimum word/sentence counts.
fn flesch_reading_ease(words: &[&str], sentence_count: usize) -> f64 {
    let n_words = words.len();
    if n_words < FLESCH_MIN_WORDS || sentence_count == 0 {
        return 0.0;
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let words_per_sentence = n_words as f64 / sentence_count as f64;
    let syllables_per_word = syllables as f64 / n_words as f64;

    FLESCH_BASE
        - FLESCH_SENTENCE_WEIGHT * words_per_sentence
        - FLESCH_SYLLABLE_WEIGHT * syllables_per_word
}

/// 1 - (unique bigrams / total bigrams); 0 with fewer than two words.
fn bigram_repetition(words: &[&str]) -> f64 {
    if words.len() < 2 {
        return 0.0;
    }
    let total = words.len() - 1;
    let unique: HashSet<(&str, &str)> =
        words.windows(2).map(|w| (w[0], w[1])).collect();
    1.0 - unique.len() as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let f = extract_text_features("");
        assert_eq!(f.n_chars, 0);
        assert_eq!(f.n_words, 0);
        assert_eq!(f.sentence_count, 0);
        assert_eq!(f.avg_word_len, 0.0);
        assert_eq!(f.type_token_ratio, 0.0);
        assert_eq!(f.punctuation_rate, 0.0);
        assert_eq!(f.repetition_score, 0.0);
        assert_eq!(f.readability_flesch, 0.0);
        assert_eq!(f.has_listicles, 0.0);
        assert_eq!(f.has_marketing_cta, 0.0);
        assert_eq!(f.has_disclaimer_ai, 0.0);
        assert!(f.raw_preview.is_empty());
    }

    #[test]
    fn test_cta_flag() {
        let f = extract_text_features(
            "Here are 5 tips to improve focus: 1) Sleep 2) Plan 3) Review. Like and subscribe!",
        );
        assert_eq!(f.has_marketing_cta, 1.0);
        // Paren-style "1)" markers are not in the listicle marker set
        assert_eq!(f.has_listicles, 0.0);
        assert_eq!(f.has_disclaimer_ai, 0.0);
    }

    #[test]
    fn test_bullet_list_markers() {
        let dash = extract_text_features("My notes:\nitem- one\nitem- two");
        assert_eq!(dash.has_listicles, 1.0);
    }

    #[test]
    fn test_numbered_list_marker() {
        let f = extract_text_features("Top tips: 1. sleep well 2. plan ahead 3. review daily");
        assert_eq!(f.has_listicles, 1.0);
    }

    #[test]
    fn test_ai_disclaimer_flag_case_insensitive() {
        let f = extract_text_features("As an AI, I cannot feel excitement.");
        assert_eq!(f.has_disclaimer_ai, 1.0);
    }

    #[test]
    fn test_sentence_split() {
        assert_eq!(split_sentences("Hi. Bye."), vec!["Hi.", "Bye."]);
        assert_eq!(split_sentences("Hello world"), vec!["Hello world"]);
        assert_eq!(split_sentences("One! Two? Three."), vec!["One!", "Two?", "Three."]);
        assert_eq!(split_sentences(""), Vec::<&str>::new());
        // Split only triggers on whitespace after terminal punctuation
        assert_eq!(split_sentences("v1.2 is out"), vec!["v1.2 is out"]);
    }

    #[test]
    fn test_syllable_counts() {
        assert_eq!(count_syllables("focus"), 2);
        assert_eq!(count_syllables("cake"), 1); // silent e
        assert_eq!(count_syllables("the"), 1); // e floor guard
        assert_eq!(count_syllables("e"), 1);
        assert_eq!(count_syllables("strength"), 1);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("123"), 0);
    }

    #[test]
    fn test_repetition_score() {
        let f = extract_text_features("the cat the cat the cat");
        // 5 bigrams, 2 unique -> 0.6
        assert!((f.repetition_score - 0.6).abs() < 1e-9);

        let unique = extract_text_features("every single word differs here");
        assert_eq!(unique.repetition_score, 0.0);

        let single = extract_text_features("word");
        assert_eq!(single.repetition_score, 0.0);
    }

    #[test]
    fn test_type_token_ratio() {
        let f = extract_text_features("one two two three three three");
        assert!((f.type_token_ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_word_tokenization_keeps_contractions() {
        let f = extract_text_features("don't stop believing");
        assert_eq!(f.n_words, 3);
    }

    #[test]
    fn test_flesch_needs_minimum_material() {
        assert_eq!(extract_text_features("too few words").readability_flesch, 0.0);

        let f = extract_text_features("The quick brown fox jumps over the lazy dog.");
        assert!(f.readability_flesch > 0.0);
        assert!(f.readability_flesch <= 206.835);
    }

    #[test]
    fn test_punctuation_rate_bounds() {
        let f = extract_text_features("Wait... what?! Really; truly: yes - no.");
        assert!(f.punctuation_rate > 0.0 && f.punctuation_rate <= 1.0);
    }

    #[test]
    fn test_preview_truncation() {
        let long = "a".repeat(500);
        let f = extract_text_features(&long);
        assert_eq!(f.raw_preview.chars().count(), 300);
        assert_eq!(f.n_chars, 500);
    }

    #[test]
    fn test_avg_sentence_len() {
        let f = extract_text_features("One two three. Four five.");
        assert_eq!(f.sentence_count, 2);
        assert!((f.avg_sentence_len - 2.5).abs() < 1e-9);
    }
}
