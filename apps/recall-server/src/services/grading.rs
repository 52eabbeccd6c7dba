//! Option resolution for grading requests.

use recall_core::{analyze_phrase_complexity, ComparisonOptions, OptionOverrides};

use crate::error::{ApiError, Result};

/// Reject `text` when it is longer than `limit` characters.
pub fn ensure_within_limit(field: &str, text: &str, limit: usize) -> Result<()> {
    let length = text.chars().count();
    if length > limit {
        return Err(ApiError::BadRequest(format!(
            "{} is {} characters long, the limit is {}",
            field, length, limit
        )));
    }
    Ok(())
}

/// Build the options for one comparison.
///
/// Starts from the server defaults, optionally gates at the target's
/// recommended accuracy, then applies request overrides. An explicit
/// `minimum_accuracy` override wins over the adaptive gate.
pub fn resolve_options(
    defaults: &ComparisonOptions,
    target: &str,
    overrides: Option<&OptionOverrides>,
    adaptive_threshold: bool,
) -> Result<ComparisonOptions> {
    let base = if adaptive_threshold {
        let complexity = analyze_phrase_complexity(target);
        tracing::debug!(
            complexity = complexity.level.as_str(),
            recommended_accuracy = complexity.recommended_accuracy,
            "Applying adaptive threshold"
        );
        defaults.with_recommended_accuracy(&complexity)
    } else {
        *defaults
    };

    let options = ComparisonOptions::merge(&base, overrides);
    options.validate()?;
    Ok(options)
}
