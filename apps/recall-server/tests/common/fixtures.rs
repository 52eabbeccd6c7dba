//! Request body factories.

#![allow(dead_code)]

use serde_json::json;

/// Thirteen-word affirmation, classified complex (gate 90).
pub const LONG_AFFIRMATION: &str = "je choisis chaque jour la paix la joie et la confiance en moi";

/// The long affirmation without its last word (accuracy 93).
pub const LONG_AFFIRMATION_TRUNCATED: &str =
    "je choisis chaque jour la paix la joie et la confiance en";

/// A phrase of `words` four-character words ("mot "), trimmed.
pub fn phrase_of_words(words: usize) -> String {
    "mot ".repeat(words).trim_end().to_string()
}

/// Create a compare request body.
pub fn compare_request(input: &str, target: &str) -> serde_json::Value {
    json!({ "input": input, "target": target })
}

/// Create a compare request body with option overrides.
pub fn compare_request_with_options(
    input: &str,
    target: &str,
    options: serde_json::Value,
) -> serde_json::Value {
    json!({ "input": input, "target": target, "options": options })
}

/// Create a compare request body using the adaptive threshold.
pub fn adaptive_compare_request(input: &str, target: &str) -> serde_json::Value {
    json!({ "input": input, "target": target, "adaptive_threshold": true })
}

/// Create a quick compare request body.
pub fn quick_compare_request(
    input: &str,
    target: &str,
    strict_mode: Option<bool>,
) -> serde_json::Value {
    match strict_mode {
        Some(strict) => json!({ "input": input, "target": target, "strict_mode": strict }),
        None => json!({ "input": input, "target": target }),
    }
}

/// Create a normalize request body.
pub fn normalize_request(text: &str, options: Option<serde_json::Value>) -> serde_json::Value {
    match options {
        Some(o) => json!({ "text": text, "options": o }),
        None => json!({ "text": text }),
    }
}

/// Create a complexity request body.
pub fn complexity_request(phrase: &str) -> serde_json::Value {
    json!({ "phrase": phrase })
}

/// Create a suggestions request body.
pub fn suggestions_request(
    word: &str,
    candidates: &[&str],
    max_suggestions: Option<usize>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("word".to_string(), json!(word));
    obj.insert("candidates".to_string(), json!(candidates));
    if let Some(n) = max_suggestions {
        obj.insert("max_suggestions".to_string(), json!(n));
    }
    serde_json::Value::Object(obj)
}
