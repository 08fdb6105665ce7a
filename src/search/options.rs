//! Per-query search options.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::language::Language;
use crate::error::{LexicaError, Result};

/// Weight of the title when neither `searchColumns` nor a title weight is set.
pub const DEFAULT_TITLE_WEIGHT: f64 = 2.0;

/// Weight of any other column without an explicit weight.
pub const DEFAULT_COLUMN_WEIGHT: f64 = 1.0;

/// Largest usable column weight. A column is repeated at most this many
/// times in a document.
pub const MAX_COLUMN_WEIGHT: f64 = 100.0;

/// Whether `weight` can be used as a column weight.
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0 && weight <= MAX_COLUMN_WEIGHT
}

/// Options controlling a single search.
///
/// Serialized with camelCase names:
///
/// ```
/// use lexica::search::SearchOptions;
///
/// let options = SearchOptions::from_json(
///     r#"{"columnWeights": {"title": 3}, "searchColumns": ["title", "status"], "fuzzySearch": true}"#,
/// )
/// .unwrap();
///
/// assert!(options.fuzzy_search);
/// assert_eq!(options.column_weight("Title"), Some(3.0));
/// assert_eq!(options.search_columns, vec!["title", "status"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Repeat count per column when building documents (rounded up).
    pub column_weights: BTreeMap<String, f64>,
    /// Columns to index. Empty means title and description.
    pub search_columns: Vec<String>,
    /// Blend a fuzzy edit-distance score into the cosine score.
    pub fuzzy_search: bool,
    /// Only search rows written in this language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl SearchOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of a column.
    pub fn with_column_weight<S: Into<String>>(mut self, column: S, weight: f64) -> Self {
        self.column_weights.insert(column.into(), weight);
        self
    }

    /// Add a column to search.
    pub fn with_search_column<S: Into<String>>(mut self, column: S) -> Self {
        self.search_columns.push(column.into());
        self
    }

    /// Replace the columns to search.
    pub fn with_search_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable fuzzy matching.
    pub fn with_fuzzy_search(mut self, fuzzy_search: bool) -> Self {
        self.fuzzy_search = fuzzy_search;
        self
    }

    /// Restrict the search to one language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// The usable weight configured for a column.
    ///
    /// An exactly named entry wins over a case-insensitive one. Weights
    /// outside `(0, MAX_COLUMN_WEIGHT]` count as unset.
    pub fn column_weight(&self, column: &str) -> Option<f64> {
        let weight = self.column_weights.get(column).copied().or_else(|| {
            self.column_weights
                .iter()
                .find(|(name, _)| name.to_lowercase() == column.to_lowercase())
                .map(|(_, weight)| *weight)
        })?;

        is_valid_weight(weight).then_some(weight)
    }

    /// The weight of a column, falling back to `default`.
    pub fn column_weight_or(&self, column: &str, default: f64) -> f64 {
        self.column_weight(column).unwrap_or(default)
    }

    /// Parse options from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `LexicaError::Config` for malformed JSON or an unusable column
    /// weight.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: SearchOptions = serde_json::from_str(json)
            .map_err(|e| LexicaError::config(format!("Invalid search options: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every configured column weight is usable.
    pub fn validate(&self) -> Result<()> {
        match self
            .column_weights
            .iter()
            .find(|(_, weight)| !is_valid_weight(**weight))
        {
            Some((column, weight)) => Err(LexicaError::config(format!(
                "Weight of column {column:?} must be in (0, {MAX_COLUMN_WEIGHT}], got {weight}"
            ))),
            None => Ok(()),
        }
    }

    /// Load options from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Serialize the options as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SearchOptions::default();
        assert!(options.column_weights.is_empty());
        assert!(options.search_columns.is_empty());
        assert!(!options.fuzzy_search);
        assert_eq!(options.language, None);
    }

    #[test]
    fn test_invalid_weights_are_unset() {
        let options = SearchOptions::new()
            .with_column_weight("title", 0.0)
            .with_column_weight("description", -2.0)
            .with_column_weight("status", f64::NAN)
            .with_column_weight("owner", f64::INFINITY)
            .with_column_weight("summary", 1e20);

        for column in ["title", "description", "status", "owner", "summary"] {
            assert_eq!(options.column_weight(column), None);
        }
        assert_eq!(options.column_weight_or("title", DEFAULT_TITLE_WEIGHT), 2.0);
    }

    #[test]
    fn test_weight_bounds() {
        let options = SearchOptions::new()
            .with_column_weight("title", MAX_COLUMN_WEIGHT)
            .with_column_weight("description", MAX_COLUMN_WEIGHT + 0.5);

        assert_eq!(options.column_weight("title"), Some(MAX_COLUMN_WEIGHT));
        assert_eq!(options.column_weight("description"), None);
        assert!(options.validate().is_err());
        assert!(SearchOptions::new().with_column_weight("title", 3.0).validate().is_ok());
    }

    #[test]
    fn test_json_rejects_unusable_weights() {
        for json in [
            r#"{"columnWeights": {"title": 1e20}}"#,
            r#"{"columnWeights": {"title": 0}}"#,
            r#"{"columnWeights": {"title": -1.5}}"#,
        ] {
            let err = SearchOptions::from_json(json).unwrap_err();
            assert!(matches!(err, LexicaError::Config(_)), "{json}");
        }
    }

    #[test]
    fn test_exact_weight_wins() {
        let options = SearchOptions::new()
            .with_column_weight("Title", 5.0)
            .with_column_weight("title", 1.5);

        assert_eq!(options.column_weight("title"), Some(1.5));
        assert_eq!(options.column_weight("Title"), Some(5.0));
    }

    #[test]
    fn test_json_round_trip_keeps_camel_case() {
        let options = SearchOptions::new()
            .with_column_weight("title", 2.5)
            .with_search_columns(["title", "status"])
            .with_fuzzy_search(true)
            .with_language(Language::Korean);

        let json = options.to_json().unwrap();
        assert!(json.contains("\"columnWeights\""));
        assert!(json.contains("\"fuzzySearch\":true"));
        assert!(json.contains("\"language\":\"ko\""));
        assert_eq!(SearchOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn test_partial_json() {
        let options = SearchOptions::from_json(r#"{"fuzzySearch": true}"#).unwrap();
        assert!(options.fuzzy_search);
        assert!(options.search_columns.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = SearchOptions::from_json("{not json").unwrap_err();
        assert!(matches!(err, LexicaError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, r#"{"searchColumns": ["summary"], "language": "en"}"#).unwrap();

        let options = SearchOptions::from_file(&path).unwrap();
        assert_eq!(options.search_columns, vec!["summary"]);
        assert_eq!(options.language, Some(Language::English));

        assert!(SearchOptions::from_file(dir.path().join("missing.json")).is_err());
    }
}
