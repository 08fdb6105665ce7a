//! Token filter implementations for text analysis.
//!
//! Filters transform a token stream after tokenization: they can drop
//! tokens, or insert generated ones next to their source.
//!
//! # Available Filters
//!
//! - [`length::LengthFilter`] - Drops tokens shorter than a minimum
//! - [`prefix::PrefixFilter`] - Adds a prefix stub after long tokens
//! - [`synonym::SynonymFilter`] - Adds dictionary synonyms after a token
//! - [`unique::UniqueFilter`] - Removes repeated token texts
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Length → Prefix → Synonym → Unique
//! ```
//!
//! # Examples
//!
//! ```
//! use lexica::analysis::token::Token;
//! use lexica::analysis::token_filter::Filter;
//! use lexica::analysis::token_filter::length::LengthFilter;
//!
//! let filter = LengthFilter::new(3);
//! let tokens = vec![Token::new("a", 0), Token::new("bug", 1)];
//! let kept: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "bug");
//! ```

pub mod length;
pub mod prefix;
pub mod synonym;
pub mod unique;

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}
