//! Typo-tolerant fuzzy scoring.

use crate::analysis::tokenize_raw;
use crate::util::levenshtein::within_distance;

/// Largest edit distance at which two terms still count as a match.
pub const FUZZY_MAX_EDITS: usize = 2;

/// Factor applied to the fuzzy score before it competes with cosine.
pub const FUZZY_WEIGHT: f64 = 0.3;

/// Count the `(query term, candidate term)` pairs within
/// [`FUZZY_MAX_EDITS`] edits, divided by the number of query terms.
///
/// Both sides are tokenized without expansion. Every matching pair counts,
/// so a query term that matches a repeated candidate term several times
/// pushes the score above 1.
///
/// ```
/// use lexica::scoring::fuzzy::fuzzy_match_score;
///
/// assert_eq!(fuzzy_match_score("Login bug", "logn"), 1.0);
/// assert_eq!(fuzzy_match_score("Login bug", "payment"), 0.0);
/// ```
pub fn fuzzy_match_score(candidate: &str, query: &str) -> f64 {
    let candidate_terms = tokenize_raw(candidate);
    let query_terms = tokenize_raw(query);

    let matches = query_terms
        .iter()
        .map(|query_term| {
            candidate_terms
                .iter()
                .filter(|term| within_distance(query_term, term, FUZZY_MAX_EDITS))
                .count()
        })
        .sum::<usize>();

    matches as f64 / query_terms.len().max(1) as f64
}

/// Combine a cosine score with a fuzzy score.
pub fn blend(cosine: f64, fuzzy: f64) -> f64 {
    cosine.max(fuzzy * FUZZY_WEIGHT)
}
