//! Phrase recall grading engine shared by the Apprend+ games.
//!
//! Provides:
//! - Text normalization (case, accents, punctuation, whitespace)
//! - Levenshtein distance, typo checks and correction suggestions
//! - Word-level comparison with strict or flexible word order
//! - Phrase complexity analysis and plain-text reports
//! - Shared types (ComparisonOptions, ComparisonResult, etc.)

pub mod compare;
pub mod complexity;
pub mod distance;
pub mod error;
pub mod normalize;
pub mod report;
pub mod types;

pub use compare::{compare_texts, quick_compare};
pub use complexity::analyze_phrase_complexity;
pub use distance::{
    are_words_similar, levenshtein_distance, suggest_corrections, DEFAULT_MAX_SUGGESTIONS,
    DEFAULT_MAX_TYPO_DISTANCE,
};
pub use error::{OptionsError, Result};
pub use normalize::{normalize_text, remove_accents};
pub use report::generate_comparison_report;
pub use types::{
    ComparisonOptions, ComparisonOptionsBuilder, ComparisonResult, ComplexityLevel, DiffKind,
    OptionOverrides, PhraseComplexity, QuickCompareResult, TextDifference, DEFAULT_OPTIONS,
};
