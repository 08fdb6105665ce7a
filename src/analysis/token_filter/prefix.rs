//! Prefix stub filter.

use crate::analysis::token::{TokenStream, TokenType};
use crate::analysis::token_filter::Filter;

/// A filter that emits the first `length` characters of every source token
/// longer than `length`, right after the token itself.
///
/// The stub gives partial words a shared term: "authenticate" and
/// "authentication" both produce "aut". Tokens generated by other filters are
/// passed through untouched.
#[derive(Clone, Debug)]
pub struct PrefixFilter {
    length: usize,
}

impl PrefixFilter {
    /// Create a new prefix filter.
    pub fn new(length: usize) -> Self {
        PrefixFilter { length }
    }
}

impl Default for PrefixFilter {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Filter for PrefixFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let mut output = Vec::new();

        for token in tokens {
            let stub = if !token.is_generated() && token.char_len() > self.length {
                let prefix: String = token.text.chars().take(self.length).collect();
                Some(token.derive(prefix, TokenType::Prefix))
            } else {
                None
            };

            output.push(token);
            output.extend(stub);
        }

        Box::new(output.into_iter())
    }

    fn name(&self) -> &'static str {
        "prefix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_prefix_filter() {
        let filter = PrefixFilter::default();
        let tokens = vec![Token::new("bug", 0), Token::new("login", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();
        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, vec!["bug", "login", "log"]);
        assert_eq!(result[2].token_type, TokenType::Prefix);
        assert_eq!(result[2].position, 1);
    }

    #[test]
    fn test_generated_tokens_are_skipped() {
        let filter = PrefixFilter::default();
        let tokens = vec![Token::new("resolved", 0).with_token_type(TokenType::Synonym)];

        let result: Vec<String> = filter
            .filter(Box::new(tokens.into_iter()))
            .map(|t| t.text)
            .collect();
        assert_eq!(result, vec!["resolved"]);
    }

    #[test]
    fn test_prefix_uses_characters() {
        let filter = PrefixFilter::new(2);
        let tokens = vec![Token::new("éclair", 0)];

        let result: Vec<String> = filter
            .filter(Box::new(tokens.into_iter()))
            .map(|t| t.text)
            .collect();
        assert_eq!(result, vec!["éclair", "éc"]);
    }
}
