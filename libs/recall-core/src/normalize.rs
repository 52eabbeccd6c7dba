//! Text normalization applied before any comparison.
//!
//! Steps run in a fixed order: trim, collapse whitespace, lowercase,
//! fold accents, strip punctuation, then a final collapse to clean up
//! gaps left by removed characters. Each middle step is toggled by
//! [`ComparisonOptions`].

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::ComparisonOptions;

/// Punctuation removed outright before the generic symbol sweep.
const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '`', '«', '»', '“', '”', '‘', '’', '„',
];

/// Normalize a string for comparison according to `options`.
pub fn normalize_text(text: &str, options: &ComparisonOptions) -> String {
    let mut result = text.trim().to_string();

    if options.ignore_extra_spaces {
        result = collapse_whitespace(&result);
    }

    if !options.case_sensitive {
        result = result.to_lowercase();
    }

    if options.ignore_accents {
        result = remove_accents(&result);
    }

    if options.ignore_punctuation {
        result = strip_punctuation(&result);
    }

    collapse_whitespace(&result)
}

/// Fold accented Latin letters to their base letters.
///
/// Canonical decomposition handles most letters; ligatures and anything
/// left precomposed go through an explicit table.
pub fn remove_accents(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        match fold_latin(c) {
            Some(replacement) => folded.push_str(replacement),
            None => folded.push(c),
        }
    }
    folded
}

fn fold_latin(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' | 'Ÿ' => "Y",
        'ñ' => "n",
        'Ñ' => "N",
        'ç' => "c",
        'Ç' => "C",
        'œ' => "oe",
        'Œ' => "OE",
        'æ' => "ae",
        'Æ' => "AE",
        _ => return None,
    };
    Some(folded)
}

/// Drop listed punctuation, then anything that is neither a word
/// character (alphanumeric or `_`) nor whitespace.
///
/// Text is recomposed first so decomposed accents survive the sweep.
fn strip_punctuation(text: &str) -> String {
    text.nfc()
        .filter(|c| !PUNCTUATION.contains(c))
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Trim and collapse whitespace runs to single spaces.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn defaults() -> ComparisonOptions {
        ComparisonOptions::default()
    }

    #[test]
    fn test_accent_folding() {
        assert_eq!(normalize_text("Café à côté", &defaults()), "cafe a cote");
    }

    #[test]
    fn test_punctuation_stripping() {
        assert_eq!(normalize_text("Bonjour, ça va ?", &defaults()), "bonjour ca va");
    }

    #[test]
    fn test_french_quotes_and_apostrophes() {
        assert_eq!(
            normalize_text("« J'ai confiance » — toujours !", &defaults()),
            "jai confiance toujours"
        );
    }

    #[test]
    fn test_ligatures() {
        assert_eq!(remove_accents("cœur"), "coeur");
        assert_eq!(remove_accents("Œuvre"), "OEuvre");
        assert_eq!(remove_accents("ex æquo"), "ex aequo");
    }

    #[test]
    fn test_remove_accents_keeps_case() {
        assert_eq!(remove_accents("ÉLÈVE Noël"), "ELEVE Noel");
        assert_eq!(remove_accents("piñata garçon"), "pinata garcon");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize_text("", &defaults()), "");
        assert_eq!(normalize_text("   \t\n ", &defaults()), "");
        assert_eq!(normalize_text(" ?! ... ", &defaults()), "");
    }

    #[test]
    fn test_case_sensitive() {
        let options = ComparisonOptions::builder().case_sensitive(true).build();
        assert_eq!(normalize_text("Je Rayonne", &options), "Je Rayonne");
    }

    #[test]
    fn test_accents_kept_when_disabled() {
        let options = ComparisonOptions::builder().ignore_accents(false).build();
        assert_eq!(normalize_text("Déterminée !", &options), "déterminée");
    }

    #[test]
    fn test_decomposed_accents_kept_when_folding_disabled() {
        let options = ComparisonOptions::builder().ignore_accents(false).build();
        let decomposed = "de\u{0301}termine\u{0301}e !";
        assert_eq!(normalize_text(decomposed, &options), "déterminée");
        assert_eq!(
            normalize_text(decomposed, &options),
            normalize_text("déterminée !", &options)
        );
    }

    #[test]
    fn test_decomposed_accents_folded_by_default() {
        assert_eq!(normalize_text("Cafe\u{0301}", &defaults()), "cafe");
    }

    #[test]
    fn test_punctuation_kept_when_disabled() {
        let options = ComparisonOptions::builder().ignore_punctuation(false).build();
        assert_eq!(normalize_text("Oui, merci.", &options), "oui, merci.");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(
            normalize_text("  je   suis\t\tlibre  ", &defaults()),
            "je suis libre"
        );
        // The final pass always collapses, even with the toggle off.
        let options = ComparisonOptions::builder().ignore_extra_spaces(false).build();
        assert_eq!(normalize_text("je  suis", &options), "je suis");
    }

    #[test]
    fn test_removed_punctuation_leaves_no_gaps() {
        assert_eq!(normalize_text("oui - non", &defaults()), "oui non");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "Café à côté",
            "« Je suis Forte, et LIBRE ! »",
            "  l'œuvre   d'Ève ",
            "İstanbul 2024 ; ok",
            "",
        ];
        let option_sets = [
            defaults(),
            ComparisonOptions::builder().case_sensitive(true).build(),
            ComparisonOptions::builder().ignore_accents(false).build(),
            ComparisonOptions::builder().ignore_punctuation(false).build(),
            ComparisonOptions::builder()
                .ignore_accents(false)
                .ignore_punctuation(false)
                .ignore_extra_spaces(false)
                .case_sensitive(true)
                .build(),
        ];
        for options in &option_sets {
            for sample in samples {
                let once = normalize_text(sample, options);
                assert_eq!(normalize_text(&once, options), once, "sample {:?}", sample);
            }
        }
    }
}
