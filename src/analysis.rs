//! Text analysis module for Lexica.
//!
//! This module turns raw field text into the normalized index terms that the
//! TF-IDF vectorizer, the fuzzy scorer and the highlighter work with. The
//! pieces follow the classic analysis pipeline:
//!
//! ```text
//! Raw Text → CharFilter → Tokenizer → Filter 1 → ... → Filter N → Terms
//! ```
//!
//! The [`ScriptAwareAnalyzer`](analyzer::script::ScriptAwareAnalyzer) picks
//! the tokenizer per input: whitespace words for space-delimited scripts,
//! character n-grams for Hangul text.
//!
//! # Examples
//!
//! ```
//! use lexica::analysis::{tokenize, tokenize_raw};
//!
//! assert_eq!(tokenize_raw("Login bug, again!"), vec!["login", "bug", "again"]);
//! assert!(tokenize("login bug").contains(&"issue".to_string()));
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod language;
pub mod synonym;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::script::ScriptAwareAnalyzer;

/// Tokenize text for indexing, with synonym and prefix expansion.
///
/// The returned terms are deduplicated, first occurrence wins.
pub fn tokenize(text: &str) -> Vec<String> {
    ScriptAwareAnalyzer::expanding().terms(text)
}

/// Tokenize text without expansion.
///
/// Used by the raw comparison paths (fuzzy matching and highlighting).
/// Duplicate terms are preserved.
pub fn tokenize_raw(text: &str) -> Vec<String> {
    ScriptAwareAnalyzer::raw().terms(text)
}
