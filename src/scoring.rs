//! Relevance scoring.
//!
//! TF-IDF term weighting over one batch of documents, cosine similarity
//! between the resulting sparse vectors, and a typo-tolerant fuzzy score
//! built on bounded edit distance.

pub mod fuzzy;
pub mod similarity;
pub mod tfidf;

pub use fuzzy::{blend, fuzzy_match_score};
pub use similarity::cosine_similarity;
pub use tfidf::{TermVector, TfIdfVectorizer};
