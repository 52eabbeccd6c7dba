//! Error types for recall-core.

use thiserror::Error;

/// Result type alias using OptionsError.
pub type Result<T> = std::result::Result<T, OptionsError>;

/// Errors raised while validating comparison settings.
///
/// The comparison operations themselves never fail; these only surface
/// when settings arrive from outside (config files, request bodies).
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("minimum accuracy must be a finite, non-negative percentage, got {0}")]
    InvalidMinimumAccuracy(f64),
}
