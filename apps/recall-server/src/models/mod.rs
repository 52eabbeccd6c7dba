//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from recall-core
pub use recall_core::types::{
    ComparisonOptions, ComparisonResult, ComplexityLevel, DiffKind, OptionOverrides,
    PhraseComplexity, QuickCompareResult, TextDifference,
};

// === API Request/Response Types ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub input: String,
    pub target: String,
    #[serde(default)]
    pub options: Option<OptionOverrides>,
    /// Gate at the target's recommended accuracy unless `options`
    /// sets `minimum_accuracy` explicitly.
    #[serde(default)]
    pub adaptive_threshold: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickCompareRequest {
    pub input: String,
    pub target: String,
    #[serde(default = "default_strict_mode")]
    pub strict_mode: bool,
}

fn default_strict_mode() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub result: ComparisonResult,
    pub report: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeRequest {
    pub text: String,
    #[serde(default)]
    pub options: Option<OptionOverrides>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeResponse {
    pub normalized: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityRequest {
    pub phrase: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsRequest {
    pub word: String,
    pub candidates: Vec<String>,
    #[serde(default)]
    pub max_suggestions: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}
