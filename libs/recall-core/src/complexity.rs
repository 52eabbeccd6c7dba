//! Difficulty classification of target phrases.

use crate::types::{ComplexityLevel, PhraseComplexity};

/// Words longer than this count as complex.
const COMPLEX_WORD_LENGTH: usize = 8;

/// Classify a phrase to recommend an accuracy gate.
///
/// Advisory only: callers decide whether to apply
/// [`PhraseComplexity::recommended_accuracy`].
pub fn analyze_phrase_complexity(phrase: &str) -> PhraseComplexity {
    let lengths: Vec<usize> = phrase
        .split_whitespace()
        .map(|w| w.chars().count())
        .collect();

    let word_count = lengths.len();
    let average_word_length = if word_count == 0 {
        0.0
    } else {
        let mean = lengths.iter().sum::<usize>() as f64 / word_count as f64;
        (mean * 10.0).round() / 10.0
    };
    let has_complex_words = lengths.iter().any(|&len| len > COMPLEX_WORD_LENGTH);

    let level = if word_count > 10 || average_word_length > 6.0 || has_complex_words {
        ComplexityLevel::Complex
    } else if word_count > 6 || average_word_length > 4.0 {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Simple
    };

    PhraseComplexity {
        word_count,
        average_word_length,
        has_complex_words,
        level,
        recommended_accuracy: level.recommended_accuracy(),
    }
}
