//! # Lexica
//!
//! An in-memory lexical search and ranking engine for structured rows.
//!
//! Given a slice of rows with named text fields and a free-text or
//! structured query, Lexica returns the rows ordered by relevance with the
//! query terms marked in their title and description.
//!
//! ## Features
//!
//! - Script-aware tokenization: words for space-delimited text, character
//!   bigrams and trigrams for Hangul
//! - Synonym and prefix expansion at indexing time
//! - TF-IDF weighting and cosine similarity over sparse vectors
//! - Typo tolerance through bounded Levenshtein distance
//! - Field-scoped boolean queries (`status:open AND login`)
//! - Per-column weights
//!
//! ## Example
//!
//! ```
//! use lexica::prelude::*;
//!
//! let corpus = vec![
//!     Row::from_pairs([("title", "Login bug"), ("description", "Cannot authenticate")]),
//!     Row::from_pairs([("title", "UI polish"), ("description", "Button color")]),
//! ];
//!
//! let options = SearchOptions::new().with_fuzzy_search(true);
//! let results = search(&corpus, "logn", DEFAULT_MAX_RESULTS, &options);
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].row.title(), "Login bug");
//! ```

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod highlight;
pub mod query;
pub mod scoring;
pub mod search;
pub mod util;

pub mod prelude {
    pub use crate::analysis::language::Language;
    pub use crate::analysis::{tokenize, tokenize_raw};
    pub use crate::document::{Row, Tag, corpus_insights, generate_tags};
    pub use crate::error::{LexicaError, Result};
    pub use crate::highlight::{HighlightConfig, Highlighter};
    pub use crate::query::{ParsedQuery, parse_query};
    pub use crate::scoring::{TermVector, TfIdfVectorizer, cosine_similarity, fuzzy_match_score};
    pub use crate::search::{DEFAULT_MAX_RESULTS, SearchEngine, SearchOptions, SearchResult, search};
    pub use crate::util::levenshtein::levenshtein_distance;
}

pub use query::parse_query;
pub use scoring::cosine_similarity;
pub use search::search;
pub use util::levenshtein::levenshtein_distance;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
