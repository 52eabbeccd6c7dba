//! Phrase analysis endpoints

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use recall_core::{analyze_phrase_complexity, suggest_corrections, DEFAULT_MAX_SUGGESTIONS};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::grading;
use crate::AppState;

/// POST /api/phrases/complexity
pub async fn complexity(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ComplexityRequest>, JsonRejection>,
) -> Result<Json<PhraseComplexity>> {
    let Json(request) = payload?;
    grading::ensure_within_limit("phrase", &request.phrase, state.config.max_phrase_chars)?;
    Ok(Json(analyze_phrase_complexity(&request.phrase)))
}

/// POST /api/phrases/suggestions
/// Ranks candidate words by edit distance to the given word
pub async fn suggestions(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SuggestionsRequest>, JsonRejection>,
) -> Result<Json<SuggestionsResponse>> {
    let Json(request) = payload?;
    let limit = state.config.max_phrase_chars;
    grading::ensure_within_limit("word", &request.word, limit)?;
    // Every candidate is measured against the word, so the limit covers their sum.
    grading::ensure_within_limit("candidates", &request.candidates.concat(), limit)?;
    let max_suggestions = request.max_suggestions.unwrap_or(DEFAULT_MAX_SUGGESTIONS);
    if max_suggestions == 0 {
        return Err(ApiError::BadRequest(
            "max_suggestions must be at least 1".to_string(),
        ));
    }

    Ok(Json(SuggestionsResponse {
        suggestions: suggest_corrections(&request.word, &request.candidates, max_suggestions),
    }))
}
