//! Analyzer implementations that combine tokenizers and filters.
//!
//! An analyzer is the complete text-to-terms step: it owns the char
//! filters, the tokenizer and the token filter chain.
//!
//! # Available Analyzers
//!
//! - [`pipeline::PipelineAnalyzer`] - A tokenizer plus any number of filters
//! - [`script::ScriptAwareAnalyzer`] - Chooses a word or n-gram pipeline per input

pub mod pipeline;
pub mod script;

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into a stream of terms.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer.
    fn name(&self) -> &str;

    /// Analyze the text and collect the token texts.
    fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }
}
