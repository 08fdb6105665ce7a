//! The ranking pipeline.
//!
//! A search rebuilds its term statistics from scratch on every call:
//!
//! ```text
//! Pre-filter → Build documents → Vectorize → Score → Filter → Highlight → Sort + Truncate
//! ```
//!
//! Nothing is cached between calls and the corpus is only borrowed, so the
//! same slice of rows can be searched from several threads at once.
//!
//! # Examples
//!
//! ```
//! use lexica::document::row::Row;
//! use lexica::search::{SearchOptions, search};
//!
//! let corpus = vec![
//!     Row::from_pairs([("title", "Login bug"), ("description", "Cannot authenticate")]),
//!     Row::from_pairs([("title", "UI polish"), ("description", "Button color")]),
//! ];
//!
//! let results = search(&corpus, "login", 20, &SearchOptions::default());
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].index, 0);
//! assert!(results[0].highlighted_title.contains("<mark>Login</mark>"));
//! ```

pub mod engine;
pub mod options;
pub mod result;

pub use engine::{DEFAULT_MAX_RESULTS, MIN_SIMILARITY, SearchEngine, search};
pub use options::SearchOptions;
pub use result::SearchResult;
