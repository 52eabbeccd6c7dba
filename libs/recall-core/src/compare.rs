//! Word-level grading of a typed phrase against its target.
//!
//! Both strings are normalized, split into words and aligned either by
//! position (strict order) or by first available match (flexible order).
//! Accuracy weights the share of correct target words at 70% and the
//! share of correctly recalled target characters at 30%.

use crate::distance::{are_words_similar, levenshtein_distance};
use crate::normalize::normalize_text;
use crate::types::{ComparisonOptions, ComparisonResult, QuickCompareResult, TextDifference};

const WORD_WEIGHT: f64 = 0.7;
const CHARACTER_WEIGHT: f64 = 0.3;

/// Minimum accuracy used by [`quick_compare`] in strict mode.
pub const QUICK_STRICT_ACCURACY: f64 = 95.0;

/// Minimum accuracy used by [`quick_compare`] in lenient mode.
pub const QUICK_LENIENT_ACCURACY: f64 = 85.0;

/// Differences plus the counters accuracy is computed from.
#[derive(Debug, Default)]
struct Alignment {
    differences: Vec<TextDifference>,
    correct_words: usize,
    correct_characters: usize,
}

impl Alignment {
    fn exact(&mut self, word: &str, position: usize) {
        self.differences.push(TextDifference::correct(word, position));
        self.correct_words += 1;
        self.correct_characters += char_len(word);
    }

    fn near_miss(&mut self, word: &str, expected: &str, position: usize) {
        self.differences
            .push(TextDifference::near_miss(word, expected, position));
        self.correct_words += 1;
        self.correct_characters += char_len(word).min(char_len(expected));
    }
}

/// Compare typed input against the target phrase.
///
/// Never fails. An empty target only matches an empty input; any other
/// input against an empty target scores 0 and does not match.
pub fn compare_texts(input: &str, target: &str, options: &ComparisonOptions) -> ComparisonResult {
    let normalized_input = normalize_text(input, options);
    let normalized_target = normalize_text(target, options);
    let exact_match = normalized_input == normalized_target;

    let input_words: Vec<&str> = normalized_input.split_whitespace().collect();
    let target_words: Vec<&str> = normalized_target.split_whitespace().collect();

    let alignment = if options.strict_word_order {
        align_strict(&input_words, &target_words, options)
    } else {
        align_flexible(&input_words, &target_words, options)
    };

    let (word_accuracy, character_accuracy) = if target_words.is_empty() {
        if exact_match {
            (100.0, 100.0)
        } else {
            (0.0, 0.0)
        }
    } else {
        let target_characters: usize = target_words.iter().map(|w| char_len(w)).sum();
        (
            percentage(alignment.correct_words, target_words.len()),
            percentage(alignment.correct_characters, target_characters),
        )
    };

    let accuracy =
        (word_accuracy * WORD_WEIGHT + character_accuracy * CHARACTER_WEIGHT).round() as u32;
    let levenshtein_distance = levenshtein_distance(&normalized_input, &normalized_target);
    let is_match = exact_match
        || (!target_words.is_empty() && f64::from(accuracy) >= options.minimum_accuracy);

    ComparisonResult {
        is_match,
        accuracy,
        differences: alignment.differences,
        normalized_input,
        normalized_target,
        levenshtein_distance,
        word_accuracy,
        character_accuracy,
    }
}

/// Simplified comparison for game checks.
///
/// Strict mode gates at 95% with no typo tolerance; lenient mode gates at
/// 85% and accepts typos.
pub fn quick_compare(input: &str, target: &str, strict_mode: bool) -> QuickCompareResult {
    let minimum_accuracy = if strict_mode {
        QUICK_STRICT_ACCURACY
    } else {
        QUICK_LENIENT_ACCURACY
    };
    let options = ComparisonOptions::builder()
        .minimum_accuracy(minimum_accuracy)
        .allow_typos(!strict_mode)
        .build();

    let result = compare_texts(input, target, &options);
    QuickCompareResult {
        is_correct: result.is_match,
        accuracy: result.accuracy,
        differences: result.differences,
    }
}

/// Align words position by position.
fn align_strict(input: &[&str], target: &[&str], options: &ComparisonOptions) -> Alignment {
    let mut alignment = Alignment::default();

    for i in 0..input.len().max(target.len()) {
        match (input.get(i), target.get(i)) {
            (None, Some(expected)) => {
                alignment
                    .differences
                    .push(TextDifference::missing(expected, Some(i)));
            }
            (Some(word), None) => {
                alignment.differences.push(TextDifference::extra(word, i));
            }
            (Some(word), Some(expected)) if word == expected => {
                alignment.exact(word, i);
            }
            (Some(word), Some(expected))
                if options.allow_typos
                    && are_words_similar(word, expected, options.max_typo_distance) =>
            {
                alignment.near_miss(word, expected, i);
            }
            (Some(word), Some(expected)) => {
                alignment
                    .differences
                    .push(TextDifference::incorrect(word, expected, i));
                alignment.correct_characters += shared_characters(word, expected);
            }
            (None, None) => unreachable!("index below the longer word list"),
        }
    }

    alignment
}

/// Match each input word to the first unused target word, ignoring order.
///
/// Exact matches are preferred over typo matches. Target words never
/// matched are reported as missing without a position.
fn align_flexible(input: &[&str], target: &[&str], options: &ComparisonOptions) -> Alignment {
    let mut alignment = Alignment::default();
    let mut used = vec![false; target.len()];

    for (i, word) in input.iter().enumerate() {
        let exact = (0..target.len()).find(|&j| !used[j] && target[j] == *word);
        let found = exact.or_else(|| {
            if !options.allow_typos {
                return None;
            }
            (0..target.len()).find(|&j| {
                !used[j] && are_words_similar(word, target[j], options.max_typo_distance)
            })
        });

        match found {
            Some(j) => {
                used[j] = true;
                if target[j] == *word {
                    alignment.exact(word, i);
                } else {
                    alignment.near_miss(word, target[j], i);
                }
            }
            None => alignment.differences.push(TextDifference::extra(word, i)),
        }
    }

    for (expected, _) in target.iter().zip(&used).filter(|(_, used)| !**used) {
        alignment
            .differences
            .push(TextDifference::missing(expected, None));
    }

    alignment
}

/// Characters of `word` also found in `expected`, each target character
/// consumed at most once. Order is ignored.
fn shared_characters(word: &str, expected: &str) -> usize {
    let mut remaining: Vec<char> = expected.chars().collect();
    let mut shared = 0;

    for c in word.chars() {
        if let Some(idx) = remaining.iter().position(|r| *r == c) {
            remaining.swap_remove(idx);
            shared += 1;
        }
    }

    shared
}

fn percentage(part: usize, whole: usize) -> f64 {
    part as f64 * 100.0 / whole as f64
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
