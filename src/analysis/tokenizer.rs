//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split normalized text into tokens. They are the first step of
//! an analysis pipeline after char filtering.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`ngram::NgramTokenizer`] - Character n-grams over whitespace-free text
//!
//! # Examples
//!
//! ```
//! use lexica::analysis::tokenizer::Tokenizer;
//! use lexica::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod ngram;
pub mod whitespace;

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenizing never fails: any input, including the empty string, yields a
/// (possibly empty) stream. The trait requires `Send + Sync` so analyzers can
/// be shared between threads running independent queries.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}
