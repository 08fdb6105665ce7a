//! Minimum length filter.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that keeps tokens with at least `min_chars` characters.
///
/// Used on the word path to drop single letters and short fragments such as
/// "a", "of" or "to".
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_chars: usize,
}

impl LengthFilter {
    /// Create a new length filter.
    pub fn new(min_chars: usize) -> Self {
        LengthFilter { min_chars }
    }

    /// Minimum number of characters a token needs to be kept.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let min_chars = self.min_chars;
        let kept: Vec<_> = tokens.filter(|t| t.char_len() >= min_chars).collect();
        Box::new(kept.into_iter())
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_length_filter() {
        let filter = LengthFilter::new(3);
        let tokens = vec![
            Token::new("a", 0),
            Token::new("to", 1),
            Token::new("bug", 2),
            Token::new("login", 3),
        ];

        let result: Vec<String> = filter
            .filter(Box::new(tokens.into_iter()))
            .map(|t| t.text)
            .collect();
        assert_eq!(result, vec!["bug", "login"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let filter = LengthFilter::new(3);
        let tokens = vec![Token::new("버그", 0), Token::new("éte", 1)];

        let result: Vec<String> = filter
            .filter(Box::new(tokens.into_iter()))
            .map(|t| t.text)
            .collect();
        assert_eq!(result, vec!["éte"]);
    }
}
