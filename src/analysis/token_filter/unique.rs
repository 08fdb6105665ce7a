//! Duplicate removal filter.

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that drops every token whose text was already seen earlier in
/// the stream. The first occurrence wins.
#[derive(Clone, Debug, Default)]
pub struct UniqueFilter;

impl UniqueFilter {
    /// Create a new unique filter.
    pub fn new() -> Self {
        UniqueFilter
    }
}

impl Filter for UniqueFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let mut seen = AHashSet::new();
        let unique: Vec<_> = tokens.filter(|t| seen.insert(t.text.clone())).collect();
        Box::new(unique.into_iter())
    }

    fn name(&self) -> &'static str {
        "unique"
    }
}
