//! TF-IDF vectorizer.
//!
//! A vectorizer is fitted on one batch of documents at a time. Term weights
//! only mean something relative to the batch they were fitted on, so vectors
//! from different calls to [`TfIdfVectorizer::fit`] must not be compared.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::script::ScriptAwareAnalyzer;

/// A sparse term-weight vector. Terms are kept in sorted order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermVector {
    weights: BTreeMap<String, f64>,
}

impl TermVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of a term, 0.0 when absent.
    pub fn get(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Set the weight of a term.
    pub fn insert<S: Into<String>>(&mut self, term: S, weight: f64) {
        self.weights.insert(term.into(), weight);
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no term is stored.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(term, weight)` pairs in term order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.weights.iter()
    }

    /// Euclidean norm of the vector.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}

impl FromIterator<(String, f64)> for TermVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        TermVector {
            weights: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TermVector {
    type Item = (&'a String, &'a f64);
    type IntoIter = btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.weights.iter()
    }
}

/// TF-IDF vectorizer.
///
/// TF is the term count divided by the document's token count, IDF is
/// `ln(N / df)` where `N` is the batch size.
#[derive(Clone)]
pub struct TfIdfVectorizer {
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(Arc::new(ScriptAwareAnalyzer::expanding().clone()))
    }
}

impl TfIdfVectorizer {
    /// Create a new vectorizer with the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        TfIdfVectorizer { analyzer }
    }

    /// Fit the batch and return one vector per document, in input order.
    pub fn fit(&self, documents: &[String]) -> Vec<TermVector> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.analyzer.terms(doc))
            .collect();

        Self::fit_tokens(&tokenized)
    }

    /// Fit already tokenized documents.
    pub fn fit_tokens(tokenized: &[Vec<String>]) -> Vec<TermVector> {
        let n_documents = tokenized.len() as f64;

        let counts: Vec<AHashMap<&str, usize>> = tokenized
            .iter()
            .map(|tokens| {
                let mut counts = AHashMap::new();
                for token in tokens {
                    *counts.entry(token.as_str()).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut document_frequency: AHashMap<&str, usize> = AHashMap::new();
        for doc_counts in &counts {
            for term in doc_counts.keys() {
                *document_frequency.entry(*term).or_insert(0) += 1;
            }
        }

        tokenized
            .iter()
            .zip(&counts)
            .map(|(tokens, doc_counts)| {
                let doc_length = tokens.len() as f64;
                doc_counts
                    .iter()
                    .map(|(term, count)| {
                        let df = document_frequency.get(term).copied().unwrap_or(1).max(1);
                        let tf = *count as f64 / doc_length;
                        let idf = (n_documents / df as f64).ln();
                        (term.to_string(), tf * idf)
                    })
                    .collect::<TermVector>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_idf_weights() {
        let vectors = TfIdfVectorizer::fit_tokens(&[
            vec!["alpha".to_string(), "beta".to_string()],
            vec!["alpha".to_string()],
        ]);

        assert_eq!(vectors.len(), 2);
        // alpha is in every document
        assert_eq!(vectors[0].get("alpha"), 0.0);
        let expected = 0.5 * 2.0f64.ln();
        assert!((vectors[0].get("beta") - expected).abs() < 1e-12);
        assert_eq!(vectors[1].get("beta"), 0.0);
    }

    #[test]
    fn test_term_frequency_counts_repeats() {
        let vectors = TfIdfVectorizer::fit_tokens(&[
            vec!["gamma".to_string(), "gamma".to_string(), "delta".to_string()],
            vec!["other".to_string()],
        ]);

        let idf = 2.0f64.ln();
        assert!((vectors[0].get("gamma") - 2.0 / 3.0 * idf).abs() < 1e-12);
        assert!((vectors[0].get("delta") - 1.0 / 3.0 * idf).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document_gives_empty_vector() {
        let vectorizer = TfIdfVectorizer::default();
        let vectors = vectorizer.fit(&docs(&["", "login bug"]));

        assert!(vectors[0].is_empty());
        assert!(!vectors[1].is_empty());
    }

    #[test]
    fn test_fit_uses_expansion() {
        let vectorizer = TfIdfVectorizer::default();
        let vectors = vectorizer.fit(&docs(&["login bug", "ui polish"]));

        assert!(vectors[0].get("issue") > 0.0);
        assert!(vectors[0].get("log") > 0.0);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let vectorizer = TfIdfVectorizer::default();
        let batch = docs(&["login bug", "payment failure", "login"]);

        assert_eq!(vectorizer.fit(&batch), vectorizer.fit(&batch));
    }

    #[test]
    fn test_empty_batch() {
        assert!(TfIdfVectorizer::default().fit(&[]).is_empty());
    }
}
