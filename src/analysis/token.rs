//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline. Besides
//! its text it remembers where it came from ([`TokenType`]), so expansion
//! filters can tell tokens cut from the input apart from the ones they
//! generated themselves.
//!
//! # Examples
//!
//! ```
//! use lexica::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("login", 0, 0, 5);
//! assert_eq!(token.text, "login");
//! assert_eq!(token.token_type, TokenType::Word);
//!
//! let synonym = token.derive("signin", TokenType::Synonym);
//! assert_eq!(synonym.position, 0);
//! assert!(synonym.is_generated());
//! ```

/// Where a token came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A whitespace-delimited word from the input
    Word,
    /// A character n-gram from unsegmented (Hangul) input
    NGram,
    /// A synonym emitted by the synonym filter
    Synonym,
    /// A prefix stub emitted by the prefix filter
    Prefix,
}

/// A single analyzed token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the normalized text
    pub start_offset: usize,

    /// The byte offset where this token ends in the normalized text
    pub end_offset: usize,

    /// Where the token came from
    pub token_type: TokenType,
}

impl Token {
    /// Create a new word token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            token_type: TokenType::Word,
        }
    }

    /// Create a new word token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            token_type: TokenType::Word,
        }
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Create a token generated from this one. It shares the position and
    /// offsets of its source.
    pub fn derive<S: Into<String>>(&self, text: S, token_type: TokenType) -> Self {
        Token {
            text: text.into(),
            position: self.position,
            start_offset: self.start_offset,
            end_offset: self.end_offset,
            token_type,
        }
    }

    /// Whether this token was generated by an expansion filter rather than
    /// cut from the input.
    pub fn is_generated(&self) -> bool {
        matches!(self.token_type, TokenType::Synonym | TokenType::Prefix)
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A stream of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
