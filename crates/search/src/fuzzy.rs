//! Fuzzy matching algorithms.

/// Edit distance between `a` and `b` in chars, with unit costs for
/// insertion, deletion and substitution.
///
/// Keeps one row per step, sized by the shorter input.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let (long, short) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short: Vec<char> = short.chars().collect();
    if short.is_empty() {
        return long.chars().count();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(lc != sc);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[short.len()]
}

/// Count the whitespace-separated tokens of `text` that are at most one edit
/// away from `term`.
///
/// Only tokens whose length is within one character of the term are
/// compared; anything else cannot be a single edit away.
///
/// # Arguments
/// * `term` - Normalized query term
/// * `text` - Normalized text to scan
///
/// # Returns
/// Number of near-matching tokens, exact matches included
pub fn count_fuzzy_matches(term: &str, text: &str) -> usize {
    let term_len = term.chars().count();

    text.split_whitespace()
        .filter(|word| {
            let len = word.chars().count();
            len + 1 >= term_len && len <= term_len + 1 && levenshtein_distance(term, word) <= 1
        })
        .count()
}
