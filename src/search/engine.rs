//! Search engine that ranks rows against a query.

use log::{debug, trace};
use rayon::prelude::*;

use crate::analysis::language::Language;
use crate::document::builder::build_document;
use crate::document::row::Row;
use crate::highlight::Highlighter;
use crate::query::parser::QueryParser;
use crate::scoring::fuzzy::{blend, fuzzy_match_score};
use crate::scoring::similarity::cosine_similarity;
use crate::scoring::tfidf::TfIdfVectorizer;
use crate::search::options::SearchOptions;
use crate::search::result::SearchResult;

/// Rows must score strictly above this to be returned.
pub const MIN_SIMILARITY: f64 = 0.01;

/// Result count used when the caller does not pick one.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// A stateless ranking engine.
///
/// The engine holds only configuration. Every call to [`search`](Self::search)
/// fits a fresh TF-IDF batch over the rows it is given plus the query.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    vectorizer: TfIdfVectorizer,
    parser: QueryParser,
    highlighter: Highlighter,
}

impl SearchEngine {
    /// Create a search engine with the default analysis and `<mark>` highlighting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different highlighter.
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Use a different vectorizer.
    pub fn with_vectorizer(mut self, vectorizer: TfIdfVectorizer) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    /// Get the highlighter.
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Rank `corpus` against `query` and return at most `max_results` rows,
    /// best first.
    pub fn search<'a>(
        &self,
        corpus: &'a [Row],
        query: &str,
        max_results: usize,
        options: &SearchOptions,
    ) -> Vec<SearchResult<'a>> {
        if corpus.is_empty() || query.trim().is_empty() {
            debug!("Nothing to search: {} rows, query {:?}", corpus.len(), query);
            return Vec::new();
        }

        let candidates: Vec<(usize, &'a Row)> = corpus
            .iter()
            .enumerate()
            .filter(|(_, row)| match options.language {
                Some(language) => Language::detect(row.title_or_description()) == language,
                None => true,
            })
            .collect();
        debug!(
            "Pre-filter kept {} of {} rows (language: {:?})",
            candidates.len(),
            corpus.len(),
            options.language
        );

        if candidates.is_empty() {
            return Vec::new();
        }

        let mut documents: Vec<String> = candidates
            .iter()
            .map(|(_, row)| build_document(row, options))
            .collect();
        documents.push(query.to_string());

        let vectors = self.vectorizer.fit(&documents);
        let Some((query_vector, row_vectors)) = vectors.split_last() else {
            return Vec::new();
        };
        debug!(
            "Vectorized {} documents, query has {} terms",
            vectors.len(),
            query_vector.len()
        );

        let parsed = self.parser.parse(query);
        let structured = parsed.is_structured();
        debug!(
            "Parsed query into {} predicates and {} operators (structured: {})",
            parsed.predicates.len(),
            parsed.operators.len(),
            structured
        );

        let mut results: Vec<SearchResult<'a>> = candidates
            .iter()
            .zip(row_vectors)
            .zip(&documents)
            .filter_map(|(((index, row), vector), document)| {
                let cosine = cosine_similarity(vector, query_vector);
                let score = if options.fuzzy_search {
                    blend(cosine, fuzzy_match_score(document, query))
                } else {
                    cosine
                };
                trace!("Row {index}: cosine {cosine:.6}, score {score:.6}");

                if structured && !parsed.matches(row) {
                    trace!("Row {index} rejected by boolean filter");
                    return None;
                }
                if score <= MIN_SIMILARITY {
                    return None;
                }

                Some(SearchResult {
                    index: *index,
                    row,
                    score,
                    highlighted_title: self.highlighter.highlight(row.title(), query),
                    highlighted_description: self
                        .highlighter
                        .highlight(row.description(), query),
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(max_results);
        debug!("Returning {} results", results.len());

        results
    }

    /// Run independent queries over the same corpus in parallel.
    ///
    /// The result lists are returned in query order.
    pub fn search_batch<'a, Q>(
        &self,
        corpus: &'a [Row],
        queries: &[Q],
        max_results: usize,
        options: &SearchOptions,
    ) -> Vec<Vec<SearchResult<'a>>>
    where
        Q: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.search(corpus, query.as_ref(), max_results, options))
            .collect()
    }
}

/// Search with a default [`SearchEngine`].
pub fn search<'a>(
    corpus: &'a [Row],
    query: &str,
    max_results: usize,
    options: &SearchOptions,
) -> Vec<SearchResult<'a>> {
    SearchEngine::new().search(corpus, query, max_results, options)
}
