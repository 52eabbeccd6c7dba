//! Comparison endpoints

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use recall_core::{compare_texts, generate_comparison_report, normalize_text, quick_compare};

use crate::error::Result;
use crate::models::*;
use crate::services::grading;
use crate::AppState;

/// POST /api/compare
pub async fn compare(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<ComparisonResult>> {
    let Json(request) = payload?;
    let result = grade(&state, &request)?;
    Ok(Json(result))
}

/// POST /api/compare/quick
pub async fn quick(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuickCompareRequest>, JsonRejection>,
) -> Result<Json<QuickCompareResult>> {
    let Json(request) = payload?;
    let limit = state.config.max_phrase_chars;
    grading::ensure_within_limit("input", &request.input, limit)?;
    grading::ensure_within_limit("target", &request.target, limit)?;
    let result = quick_compare(&request.input, &request.target, request.strict_mode);

    tracing::debug!(
        accuracy = result.accuracy,
        is_correct = result.is_correct,
        strict_mode = request.strict_mode,
        "Quick comparison"
    );

    Ok(Json(result))
}

/// POST /api/compare/report
pub async fn report(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>> {
    let Json(request) = payload?;
    let result = grade(&state, &request)?;
    let report = generate_comparison_report(&result);

    Ok(Json(ReportResponse { result, report }))
}

/// POST /api/normalize
pub async fn normalize(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NormalizeRequest>, JsonRejection>,
) -> Result<Json<NormalizeResponse>> {
    let Json(request) = payload?;
    grading::ensure_within_limit("text", &request.text, state.config.max_phrase_chars)?;
    let options = ComparisonOptions::merge(&state.config.comparison, request.options.as_ref());

    Ok(Json(NormalizeResponse {
        normalized: normalize_text(&request.text, &options),
    }))
}

fn grade(state: &AppState, request: &CompareRequest) -> Result<ComparisonResult> {
    let limit = state.config.max_phrase_chars;
    grading::ensure_within_limit("input", &request.input, limit)?;
    grading::ensure_within_limit("target", &request.target, limit)?;

    let options = grading::resolve_options(
        &state.config.comparison,
        &request.target,
        request.options.as_ref(),
        request.adaptive_threshold,
    )?;
    let result = compare_texts(&request.input, &request.target, &options);

    tracing::debug!(
        accuracy = result.accuracy,
        is_match = result.is_match,
        minimum_accuracy = options.minimum_accuracy,
        "Compared phrase"
    );

    Ok(result)
}
