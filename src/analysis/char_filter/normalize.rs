//! Lowercasing and punctuation stripping.

use lazy_static::lazy_static;
use regex::Regex;

use super::CharFilter;

lazy_static! {
    /// Runs of Unicode punctuation, symbols and whitespace.
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[\p{P}\p{S}\s]+").unwrap();
}

/// A char filter that lowercases text, replaces every run of punctuation,
/// symbol and whitespace characters with a single space, and trims the result.
#[derive(Clone, Debug, Default)]
pub struct NormalizeCharFilter;

impl NormalizeCharFilter {
    /// Create a new normalizing char filter.
    pub fn new() -> Self {
        NormalizeCharFilter
    }
}

impl CharFilter for NormalizeCharFilter {
    fn filter(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        SEPARATOR_RUN.replace_all(&lowered, " ").trim().to_string()
    }

    fn name(&self) -> &'static str {
        "normalize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_strip() {
        let filter = NormalizeCharFilter::new();
        assert_eq!(
            filter.filter("Login-Bug: CANNOT authenticate."),
            "login bug cannot authenticate"
        );
    }

    #[test]
    fn test_symbols_are_stripped() {
        let filter = NormalizeCharFilter::new();
        assert_eq!(filter.filter("price $100 + tax = ~€120"), "price 100 tax 120");
    }

    #[test]
    fn test_runs_collapse_to_single_space() {
        let filter = NormalizeCharFilter::new();
        assert_eq!(filter.filter("a...b   c\t\nd"), "a b c d");
    }

    #[test]
    fn test_only_punctuation_is_empty() {
        let filter = NormalizeCharFilter::new();
        assert_eq!(filter.filter("?!... --- ###"), "");
        assert_eq!(filter.filter(""), "");
    }

    #[test]
    fn test_hangul_is_preserved() {
        let filter = NormalizeCharFilter::new();
        assert_eq!(filter.filter("로그인 버그!"), "로그인 버그");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(NormalizeCharFilter::new().name(), "normalize");
    }
}
