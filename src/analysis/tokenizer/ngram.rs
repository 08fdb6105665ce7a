//! N-gram tokenizer implementation.

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{LexicaError, Result};

/// A tokenizer that generates character n-grams.
///
/// Whitespace is removed before the grams are taken, so the tokenizer treats
/// its input as one unsegmented run of characters. All grams of the smallest
/// size come first, followed by all grams of the next size, and so on.
/// Offsets refer to the whitespace-free text.
///
/// # Examples
///
/// ```
/// use lexica::analysis::tokenizer::ngram::NgramTokenizer;
/// use lexica::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = NgramTokenizer::new(2, 3).unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("ab cd")
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["ab", "bc", "cd", "abc", "bcd"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramTokenizer {
    /// Minimum n-gram size
    min_gram: usize,
    /// Maximum n-gram size
    max_gram: usize,
}

impl NgramTokenizer {
    /// Create a new n-gram tokenizer.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_gram` is 0 or `max_gram` is less than `min_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 {
            return Err(LexicaError::analysis("min_gram must be at least 1"));
        }
        if max_gram < min_gram {
            return Err(LexicaError::analysis(format!(
                "max_gram ({}) must be >= min_gram ({})",
                max_gram, min_gram
            )));
        }
        Ok(Self { min_gram, max_gram })
    }

    /// Create the bigram + trigram tokenizer used for Hangul text.
    pub fn bigram_trigram() -> Self {
        Self {
            min_gram: 2,
            max_gram: 3,
        }
    }

    /// Minimum n-gram size.
    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    /// Maximum n-gram size.
    pub fn max_gram(&self) -> usize {
        self.max_gram
    }
}

impl Tokenizer for NgramTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();

        // Byte offset of every char boundary in the compacted text
        let mut boundaries = Vec::with_capacity(chars.len() + 1);
        let mut offset = 0;
        boundaries.push(0);
        for c in &chars {
            offset += c.len_utf8();
            boundaries.push(offset);
        }

        let mut tokens = Vec::new();
        for gram_size in self.min_gram..=self.max_gram {
            if gram_size > chars.len() {
                break;
            }
            for start in 0..=chars.len() - gram_size {
                let end = start + gram_size;
                let ngram: String = chars[start..end].iter().collect();
                let position = tokens.len();
                tokens.push(
                    Token::with_offsets(ngram, position, boundaries[start], boundaries[end])
                        .with_token_type(TokenType::NGram),
                );
            }
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}
