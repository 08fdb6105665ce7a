//! Rows and the caller-side helpers around them.
//!
//! The search engine works on a borrowed slice of [`Row`]s. This module
//! holds the row type itself, the weighted document builder used by the
//! ranking pipeline, and the collaborators a caller needs around a search:
//! file converters, corpus validation, dataset combination, row tags and
//! corpus statistics.
//!
//! # Examples
//!
//! ```
//! use lexica::document::row::Row;
//! use lexica::document::{available_columns, combine_datasets};
//!
//! let first = vec![Row::from_pairs([("Title", "Login bug"), ("status", "open")])];
//! let second = vec![Row::from_pairs([("description", "Button color")])];
//!
//! let combined = combine_datasets(vec![
//!     ("tickets.csv".to_string(), first),
//!     ("ui.csv".to_string(), second),
//! ]);
//! assert_eq!(combined[1].get("_fileName"), "ui.csv");
//! assert_eq!(combined[0].title(), "Login bug");
//! assert_eq!(available_columns(&combined), vec!["Title", "description", "status"]);
//! ```

pub mod builder;
pub mod converter;
pub mod insights;
pub mod row;
pub mod tags;
pub mod validation;

pub use builder::build_document;
pub use insights::{CorpusInsights, corpus_insights};
pub use row::Row;
pub use tags::{Tag, generate_tags};
pub use validation::{
    FILE_NAME_FIELD, ValidationReport, available_columns, combine_datasets, validate_corpus,
};
