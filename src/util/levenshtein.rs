//! Levenshtein edit distance.
//!
//! Distances are measured in Unicode scalar values, so "버그" and "버거" are
//! one substitution apart.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `s1` into `s2`.
///
/// ```
/// use lexica::util::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "bug"), 3);
/// ```
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two rows of the DP matrix are enough
    let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut current = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        current[0] = i + 1;

        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            current[j + 1] = min(
                min(previous[j + 1] + 1, current[j] + 1),
                previous[j] + cost,
            );
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2_chars.len()]
}

/// Whether the two strings are at most `max_edits` edits apart.
///
/// Pairs whose lengths differ by more than `max_edits` are rejected without
/// running the full computation.
pub fn within_distance(s1: &str, s2: &str, max_edits: usize) -> bool {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1.abs_diff(len2) > max_edits {
        return false;
    }

    levenshtein_distance(s1, s2) <= max_edits
}
