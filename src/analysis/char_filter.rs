//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text before it reaches the tokenizer.
//!
//! # Available Filters
//!
//! - [`normalize::NormalizeCharFilter`] - Lowercasing plus punctuation/symbol stripping
//!
//! # Examples
//!
//! ```
//! use lexica::analysis::char_filter::CharFilter;
//! use lexica::analysis::char_filter::normalize::NormalizeCharFilter;
//!
//! let filter = NormalizeCharFilter::new();
//! assert_eq!(filter.filter("  Hello, World!! "), "hello world");
//! ```

pub mod normalize;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}
