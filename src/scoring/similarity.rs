//! Cosine similarity between sparse term vectors.

use std::cmp::Ordering;

use crate::scoring::tfidf::TermVector;

/// Cosine similarity of two term vectors, in `[0, 1]`.
///
/// Returns 0.0 when either vector has zero norm. The dot product is a merge
/// over the sorted term lists, so swapping the arguments yields exactly the
/// same value.
///
/// ```
/// use lexica::scoring::similarity::cosine_similarity;
/// use lexica::scoring::tfidf::TermVector;
///
/// let a: TermVector = [("bug".to_string(), 1.0), ("login".to_string(), 1.0)]
///     .into_iter()
///     .collect();
/// assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
/// assert_eq!(cosine_similarity(&a, &TermVector::new()), 0.0);
/// ```
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot = dot_product(a, b);
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn dot_product(a: &TermVector, b: &TermVector) -> f64 {
    let mut left = a.iter().peekable();
    let mut right = b.iter().peekable();
    let mut sum = 0.0;

    while let (Some((term_a, weight_a)), Some((term_b, weight_b))) = (left.peek(), right.peek()) {
        match term_a.cmp(term_b) {
            Ordering::Equal => {
                sum += *weight_a * *weight_b;
                left.next();
                right.next();
            }
            Ordering::Less => {
                left.next();
            }
            Ordering::Greater => {
                right.next();
            }
        }
    }

    sum
}
