//! Synonym expansion filter.

use crate::analysis::synonym::SynonymDictionary;
use crate::analysis::token::{TokenStream, TokenType};
use crate::analysis::token_filter::Filter;

/// A filter that emits the dictionary synonyms of every source token right
/// after it. Synonyms share the position and offsets of their source token.
#[derive(Clone, Debug)]
pub struct SynonymFilter {
    dictionary: &'static SynonymDictionary,
}

impl SynonymFilter {
    /// Create a synonym filter over the given dictionary.
    pub fn new(dictionary: &'static SynonymDictionary) -> Self {
        SynonymFilter { dictionary }
    }
}

impl Default for SynonymFilter {
    fn default() -> Self {
        Self::new(SynonymDictionary::builtin())
    }
}

impl Filter for SynonymFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let mut output = Vec::new();

        for token in tokens {
            let synonyms = if token.is_generated() {
                None
            } else {
                self.dictionary.lookup(&token.text)
            };

            let expanded: Vec<_> = synonyms
                .unwrap_or_default()
                .iter()
                .map(|synonym| token.derive(synonym.as_str(), TokenType::Synonym))
                .collect();

            output.push(token);
            output.extend(expanded);
        }

        Box::new(output.into_iter())
    }

    fn name(&self) -> &'static str {
        "synonym"
    }
}
