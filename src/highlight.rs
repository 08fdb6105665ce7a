//! Query term highlighting.
//!
//! Wraps every whole-word, case-insensitive occurrence of a query term in
//! markup. Query terms are taken from the query tokenized without expansion,
//! so only words the user typed are marked.
//!
//! # Examples
//!
//! ```
//! use lexica::highlight::{HighlightConfig, Highlighter};
//!
//! let highlighter = Highlighter::new();
//! assert_eq!(
//!     highlighter.highlight("Login bug", "login"),
//!     "<mark>Login</mark> bug"
//! );
//!
//! let styled = Highlighter::with_config(HighlightConfig::new().css_class("hit"));
//! assert_eq!(
//!     styled.highlight("Login bug", "BUG"),
//!     "Login <mark class=\"hit\">bug</mark>"
//! );
//! ```
//!
//! Terms are applied one after another. When one term occurs inside the
//! markup inserted for another (a query containing `mark`, for instance),
//! the later pass rewrites the earlier markup.

use ahash::AHashSet;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenize_raw;

/// Markup settings for highlighted terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// HTML tag to wrap highlighted terms (e.g., "mark", "em", "strong").
    pub tag: String,
    /// CSS class to add to highlight tags.
    pub css_class: Option<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            tag: "mark".to_string(),
            css_class: None,
        }
    }
}

impl HighlightConfig {
    /// Create a new highlight configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML tag for highlighting.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the CSS class for highlight tags.
    pub fn css_class<S: Into<String>>(mut self, css_class: S) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Build the opening HTML tag.
    pub fn opening_tag(&self) -> String {
        if let Some(ref css_class) = self.css_class {
            format!("<{} class=\"{}\">", self.tag, css_class)
        } else {
            format!("<{}>", self.tag)
        }
    }

    /// Build the closing HTML tag.
    pub fn closing_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// Highlighter for search results.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a highlighter with the default `<mark>` markup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a highlighter with the given configuration.
    pub fn with_config(config: HighlightConfig) -> Self {
        Highlighter { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Highlight the terms of `query` in `text`.
    pub fn highlight(&self, text: &str, query: &str) -> String {
        let mut seen = AHashSet::new();
        let terms: Vec<String> = tokenize_raw(query)
            .into_iter()
            .filter(|term| seen.insert(term.clone()))
            .collect();

        self.highlight_terms(text, &terms)
    }

    /// Highlight the given terms in `text`, in order.
    pub fn highlight_terms<S: AsRef<str>>(&self, text: &str, terms: &[S]) -> String {
        let opening_tag = self.config.opening_tag();
        let closing_tag = self.config.closing_tag();
        let mut result = text.to_string();

        for term in terms.iter().map(AsRef::as_ref).filter(|t| !t.is_empty()) {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            match Regex::new(&pattern) {
                Ok(regex) => {
                    result = regex
                        .replace_all(&result, |caps: &regex::Captures| {
                            format!("{}{}{}", opening_tag, &caps[0], closing_tag)
                        })
                        .into_owned();
                }
                Err(e) => warn!("Skipping highlight term {term:?}: {e}"),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_every_occurrence() {
        let highlighter = Highlighter::new();
        assert_eq!(
            highlighter.highlight("Bug: the bug is a BUG", "bug"),
            "<mark>Bug</mark>: the <mark>bug</mark> is a <mark>BUG</mark>"
        );
    }

    #[test]
    fn test_whole_words_only() {
        let highlighter = Highlighter::new();
        assert_eq!(
            highlighter.highlight("debugging the bugfix", "bug"),
            "debugging the bugfix"
        );
    }

    #[test]
    fn test_multiple_terms() {
        let highlighter = Highlighter::new();
        assert_eq!(
            highlighter.highlight("Login bug in payment", "payment login"),
            "<mark>Login</mark> bug in <mark>payment</mark>"
        );
    }

    #[test]
    fn test_short_and_expanded_terms_are_not_marked() {
        let highlighter = Highlighter::new();
        // "ui" is too short to be a term, and synonyms are not used
        assert_eq!(
            highlighter.highlight("UI issue", "ui bug"),
            "UI issue"
        );
    }

    #[test]
    fn test_duplicate_query_terms_wrap_once() {
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.highlight("Login", "login LOGIN"), "<mark>Login</mark>");
    }

    #[test]
    fn test_empty_query() {
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.highlight("Login bug", ""), "Login bug");
    }

    #[test]
    fn test_custom_tag() {
        let highlighter = Highlighter::with_config(HighlightConfig::new().tag("em"));
        assert_eq!(highlighter.highlight("Login", "login"), "<em>Login</em>");
        assert_eq!(highlighter.config().closing_tag(), "</em>");
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let highlighter = Highlighter::new();
        assert_eq!(
            highlighter.highlight_terms("a+b c++ done", &["c++"]),
            "a+b c++ done"
        );
        assert_eq!(
            highlighter.highlight_terms("price list", &["pri.e"]),
            "price list"
        );
    }
}
