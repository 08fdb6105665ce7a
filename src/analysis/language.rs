//! Script detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LexicaError;

/// Whether the text contains at least one Hangul syllable (U+AC00..=U+D7AF).
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(|c| ('\u{AC00}'..='\u{D7AF}').contains(&c))
}

/// Language of a row, as far as the search engine cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Text containing Hangul
    #[serde(rename = "ko")]
    Korean,
    /// Everything else
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Detect the language of the text.
    pub fn detect(text: &str) -> Self {
        if contains_hangul(text) {
            Language::Korean
        } else {
            Language::English
        }
    }

    /// The short code used in options files.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LexicaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ko" | "korean" => Ok(Language::Korean),
            "en" | "english" => Ok(Language::English),
            other => Err(LexicaError::config(format!("Unknown language: {other}"))),
        }
    }
}
