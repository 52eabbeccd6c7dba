//! Core types for phrase recall grading.

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Default comparison settings.
///
/// Case-insensitive, accent- and punctuation-blind, positional word
/// alignment, 95% gate, typos of up to two edits accepted.
pub const DEFAULT_OPTIONS: ComparisonOptions = ComparisonOptions {
    case_sensitive: false,
    ignore_punctuation: true,
    ignore_accents: true,
    ignore_extra_spaces: true,
    strict_word_order: true,
    minimum_accuracy: 95.0,
    allow_typos: true,
    max_typo_distance: 2,
};

/// Settings controlling normalization and grading strictness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOptions {
    pub case_sensitive: bool,
    pub ignore_punctuation: bool,
    pub ignore_accents: bool,
    pub ignore_extra_spaces: bool,
    pub strict_word_order: bool,
    /// Accuracy percentage at or above which an attempt passes.
    pub minimum_accuracy: f64,
    pub allow_typos: bool,
    /// Largest per-word edit distance accepted as a typo.
    pub max_typo_distance: usize,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}

impl ComparisonOptions {
    /// Start a builder seeded with [`DEFAULT_OPTIONS`].
    pub fn builder() -> ComparisonOptionsBuilder {
        ComparisonOptionsBuilder {
            options: DEFAULT_OPTIONS,
        }
    }

    /// Merge base options with optional overrides.
    pub fn merge(base: &ComparisonOptions, overrides: Option<&OptionOverrides>) -> Self {
        match overrides {
            Some(o) => Self {
                case_sensitive: o.case_sensitive.unwrap_or(base.case_sensitive),
                ignore_punctuation: o.ignore_punctuation.unwrap_or(base.ignore_punctuation),
                ignore_accents: o.ignore_accents.unwrap_or(base.ignore_accents),
                ignore_extra_spaces: o.ignore_extra_spaces.unwrap_or(base.ignore_extra_spaces),
                strict_word_order: o.strict_word_order.unwrap_or(base.strict_word_order),
                minimum_accuracy: o.minimum_accuracy.unwrap_or(base.minimum_accuracy),
                allow_typos: o.allow_typos.unwrap_or(base.allow_typos),
                max_typo_distance: o.max_typo_distance.unwrap_or(base.max_typo_distance),
            },
            None => *base,
        }
    }

    /// Check settings that arrive from outside the process.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.minimum_accuracy.is_finite() || self.minimum_accuracy < 0.0 {
            return Err(OptionsError::InvalidMinimumAccuracy(self.minimum_accuracy));
        }
        Ok(())
    }

    /// Copy of these options gated at the phrase's recommended accuracy.
    pub fn with_recommended_accuracy(&self, complexity: &PhraseComplexity) -> Self {
        Self {
            minimum_accuracy: f64::from(complexity.recommended_accuracy),
            ..*self
        }
    }
}

/// Builder for [`ComparisonOptions`]; unset fields keep their defaults.
#[derive(Debug, Clone)]
pub struct ComparisonOptionsBuilder {
    options: ComparisonOptions,
}

impl ComparisonOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn ignore_punctuation(mut self, value: bool) -> Self {
        self.options.ignore_punctuation = value;
        self
    }

    pub fn ignore_accents(mut self, value: bool) -> Self {
        self.options.ignore_accents = value;
        self
    }

    pub fn ignore_extra_spaces(mut self, value: bool) -> Self {
        self.options.ignore_extra_spaces = value;
        self
    }

    pub fn strict_word_order(mut self, value: bool) -> Self {
        self.options.strict_word_order = value;
        self
    }

    pub fn minimum_accuracy(mut self, value: f64) -> Self {
        self.options.minimum_accuracy = value;
        self
    }

    pub fn allow_typos(mut self, value: bool) -> Self {
        self.options.allow_typos = value;
        self
    }

    pub fn max_typo_distance(mut self, value: usize) -> Self {
        self.options.max_typo_distance = value;
        self
    }

    pub fn build(self) -> ComparisonOptions {
        self.options
    }
}

/// Per-request overrides (all fields optional).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_punctuation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_accents: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_extra_spaces: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_word_order: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_typos: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_typo_distance: Option<usize>,
}

/// Classification of one token in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Correct,
    Incorrect,
    Missing,
    Extra,
}

impl DiffKind {
    /// All kinds, in report order.
    pub const ALL: [DiffKind; 4] = [Self::Correct, Self::Incorrect, Self::Missing, Self::Extra];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::Missing => "missing",
            Self::Extra => "extra",
        }
    }
}

/// One classified token of the aligned comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDifference {
    pub kind: DiffKind,
    pub text: String,
    /// Aligned position; `None` when the word has no meaningful position
    /// (target words left unmatched in flexible order).
    pub position: Option<usize>,
    /// Target word, set for typo-accepted, incorrect and missing words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_text: Option<String>,
}

impl TextDifference {
    pub fn correct(text: &str, position: usize) -> Self {
        Self {
            kind: DiffKind::Correct,
            text: text.to_string(),
            position: Some(position),
            expected_text: None,
        }
    }

    /// A word accepted as correct despite a typo.
    pub fn near_miss(text: &str, expected: &str, position: usize) -> Self {
        Self {
            kind: DiffKind::Correct,
            text: text.to_string(),
            position: Some(position),
            expected_text: Some(expected.to_string()),
        }
    }

    pub fn incorrect(text: &str, expected: &str, position: usize) -> Self {
        Self {
            kind: DiffKind::Incorrect,
            text: text.to_string(),
            position: Some(position),
            expected_text: Some(expected.to_string()),
        }
    }

    pub fn missing(expected: &str, position: Option<usize>) -> Self {
        Self {
            kind: DiffKind::Missing,
            text: expected.to_string(),
            position,
            expected_text: Some(expected.to_string()),
        }
    }

    pub fn extra(text: &str, position: usize) -> Self {
        Self {
            kind: DiffKind::Extra,
            text: text.to_string(),
            position: Some(position),
            expected_text: None,
        }
    }
}

/// Outcome of comparing a typed phrase to its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub is_match: bool,
    /// Weighted accuracy (70% words, 30% characters), rounded, 0-100.
    pub accuracy: u32,
    pub differences: Vec<TextDifference>,
    pub normalized_input: String,
    pub normalized_target: String,
    /// Edit distance between the two full normalized strings.
    pub levenshtein_distance: usize,
    pub word_accuracy: f64,
    pub character_accuracy: f64,
}

impl ComparisonResult {
    /// Number of differences of the given kind.
    pub fn count(&self, kind: DiffKind) -> usize {
        self.differences.iter().filter(|d| d.kind == kind).count()
    }

    /// Differences of the given kind, in output order.
    pub fn differences_of(&self, kind: DiffKind) -> impl Iterator<Item = &TextDifference> {
        self.differences.iter().filter(move |d| d.kind == kind)
    }
}

/// Difficulty tier of a target phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Simple,
    Medium,
    Complex,
}

impl ComplexityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        }
    }

    /// Accuracy gate recommended for phrases of this tier.
    pub fn recommended_accuracy(&self) -> u32 {
        match self {
            Self::Simple => 95,
            Self::Medium => 92,
            Self::Complex => 90,
        }
    }
}

/// Difficulty profile of a single phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseComplexity {
    pub word_count: usize,
    /// Mean word length in characters, rounded to one decimal.
    pub average_word_length: f64,
    pub has_complex_words: bool,
    pub level: ComplexityLevel,
    pub recommended_accuracy: u32,
}

/// Reduced result returned by [`crate::quick_compare`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickCompareResult {
    pub is_correct: bool,
    pub accuracy: u32,
    pub differences: Vec<TextDifference>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ComparisonOptions::default();
        assert!(!options.case_sensitive);
        assert!(options.ignore_punctuation);
        assert!(options.ignore_accents);
        assert!(options.ignore_extra_spaces);
        assert!(options.strict_word_order);
        assert_eq!(options.minimum_accuracy, 95.0);
        assert!(options.allow_typos);
        assert_eq!(options.max_typo_distance, 2);
    }

    #[test]
    fn test_builder_keeps_unset_defaults() {
        let options = ComparisonOptions::builder()
            .allow_typos(false)
            .minimum_accuracy(80.0)
            .build();
        assert!(!options.allow_typos);
        assert_eq!(options.minimum_accuracy, 80.0);
        assert!(options.strict_word_order);
        assert_eq!(options.max_typo_distance, 2);
    }

    #[test]
    fn test_merge_without_overrides() {
        let base = ComparisonOptions::builder().case_sensitive(true).build();
        assert_eq!(ComparisonOptions::merge(&base, None), base);
    }

    #[test]
    fn test_merge_with_overrides() {
        let base = ComparisonOptions::default();
        let overrides = OptionOverrides {
            strict_word_order: Some(false),
            max_typo_distance: Some(1),
            ..Default::default()
        };
        let merged = ComparisonOptions::merge(&base, Some(&overrides));
        assert!(!merged.strict_word_order);
        assert_eq!(merged.max_typo_distance, 1);
        assert_eq!(merged.minimum_accuracy, base.minimum_accuracy);
    }

    #[test]
    fn test_validate_minimum_accuracy() {
        assert!(ComparisonOptions::default().validate().is_ok());
        // Unreachable gates are allowed; only exact matches pass them.
        let strict = ComparisonOptions::builder().minimum_accuracy(101.0).build();
        assert!(strict.validate().is_ok());

        let negative = ComparisonOptions::builder().minimum_accuracy(-1.0).build();
        assert_eq!(
            negative.validate(),
            Err(OptionsError::InvalidMinimumAccuracy(-1.0))
        );
        let nan = ComparisonOptions::builder().minimum_accuracy(f64::NAN).build();
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_with_recommended_accuracy() {
        let complexity = PhraseComplexity {
            word_count: 12,
            average_word_length: 7.0,
            has_complex_words: false,
            level: ComplexityLevel::Complex,
            recommended_accuracy: 90,
        };
        let options = ComparisonOptions::default().with_recommended_accuracy(&complexity);
        assert_eq!(options.minimum_accuracy, 90.0);
        assert!(options.allow_typos);
    }

    #[test]
    fn test_complexity_level_recommendations() {
        assert_eq!(ComplexityLevel::Simple.recommended_accuracy(), 95);
        assert_eq!(ComplexityLevel::Medium.recommended_accuracy(), 92);
        assert_eq!(ComplexityLevel::Complex.recommended_accuracy(), 90);
    }

    #[test]
    fn test_difference_serialization() {
        let diff = TextDifference::missing("libre", None);
        let json = serde_json::to_value(&diff).unwrap();
        assert_eq!(json["kind"], "missing");
        assert!(json["position"].is_null());
        assert_eq!(json["expected_text"], "libre");

        let diff = TextDifference::extra("encore", 3);
        let json = serde_json::to_value(&diff).unwrap();
        assert_eq!(json["position"], 3);
        assert!(json.get("expected_text").is_none());
    }
}
