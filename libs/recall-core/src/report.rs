//! Plain-text rendering of comparison results.

use crate::types::{ComparisonResult, DiffKind, TextDifference};

/// Render a comparison result as a multi-line diagnostic.
///
/// Differences are grouped by kind (correct, incorrect, missing, extra);
/// empty groups are left out.
pub fn generate_comparison_report(result: &ComparisonResult) -> String {
    let mut lines = vec![
        "Comparison report".to_string(),
        format!(
            "Result: {}",
            if result.is_match { "match" } else { "no match" }
        ),
        format!(
            "Accuracy: {}% (words {:.1}%, characters {:.1}%)",
            result.accuracy, result.word_accuracy, result.character_accuracy
        ),
        format!("Edit distance: {}", result.levenshtein_distance),
        format!("Input: \"{}\"", result.normalized_input),
        format!("Target: \"{}\"", result.normalized_target),
    ];

    if result.differences.is_empty() {
        lines.push("No words to compare.".to_string());
    }

    for kind in DiffKind::ALL {
        let group: Vec<&TextDifference> = result.differences_of(kind).collect();
        if group.is_empty() {
            continue;
        }

        lines.push(format!("{} ({}):", heading(kind), group.len()));
        lines.extend(group.into_iter().map(describe));
    }

    lines.join("\n")
}

fn heading(kind: DiffKind) -> &'static str {
    match kind {
        DiffKind::Correct => "Correct",
        DiffKind::Incorrect => "Incorrect",
        DiffKind::Missing => "Missing",
        DiffKind::Extra => "Extra",
    }
}

fn describe(diff: &TextDifference) -> String {
    match (&diff.kind, &diff.expected_text) {
        (DiffKind::Correct | DiffKind::Incorrect, Some(expected)) => {
            format!("  - \"{}\" (expected \"{}\")", diff.text, expected)
        }
        _ => format!("  - \"{}\"", diff.text),
    }
}
