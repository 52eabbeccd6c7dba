//! Edit distance and word similarity helpers.

/// Default largest edit distance treated as a typo.
pub const DEFAULT_MAX_TYPO_DISTANCE: usize = 2;

/// Default number of corrections returned by [`suggest_corrections`].
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Calculate Levenshtein distance between two strings.
///
/// Counts characters, not bytes. No normalization is applied.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Whether two words are close enough to count as the same word with a typo.
pub fn are_words_similar(word1: &str, word2: &str, max_distance: usize) -> bool {
    if word1 == word2 {
        return true;
    }

    let len1 = word1.chars().count();
    let len2 = word2.chars().count();
    if len1.abs_diff(len2) > max_distance {
        return false;
    }

    levenshtein_distance(word1, word2) <= max_distance
}

/// Rank candidate words by closeness to `word`.
///
/// Returns at most `max_suggestions` candidates, nearest first; ties keep
/// their original order.
pub fn suggest_corrections<S: AsRef<str>>(
    word: &str,
    candidates: &[S],
    max_suggestions: usize,
) -> Vec<String> {
    let mut ranked: Vec<(usize, &str)> = candidates
        .iter()
        .map(|c| (levenshtein_distance(word, c.as_ref()), c.as_ref()))
        .collect();

    // sort_by_key is stable
    ranked.sort_by_key(|(distance, _)| *distance);

    ranked
        .into_iter()
        .take(max_suggestions)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
