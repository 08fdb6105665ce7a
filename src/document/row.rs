//! A single record of named text fields.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A row: an ordered list of field name → value pairs.
///
/// Missing fields read as the empty string. Lookup prefers an exact name
/// match and falls back to the first case-insensitive one, so `title`,
/// `Title` and `TITLE` all resolve to the same column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Row::new();
        for (name, value) in pairs {
            row.insert(name, value);
        }
        row
    }

    /// Set a field. A field with exactly the same name is replaced in place;
    /// otherwise the field is appended.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        let name = name.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_field<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Resolve a field name to the stored one.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|(field, _)| field.to_lowercase() == name.to_lowercase())
            })
            .map(|(field, _)| field.as_str())
    }

    /// Value of a field, if present.
    pub fn get_opt(&self, name: &str) -> Option<&str> {
        let resolved = self.resolve(name)?;
        self.fields
            .iter()
            .find(|(field, _)| field == resolved)
            .map(|(_, value)| value.as_str())
    }

    /// Value of a field, or the empty string when it is missing.
    pub fn get(&self, name: &str) -> &str {
        self.get_opt(name).unwrap_or("")
    }

    /// Whether the row has the field (case-insensitively).
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// The `title` field.
    pub fn title(&self) -> &str {
        self.get("title")
    }

    /// The `description` field.
    pub fn description(&self) -> &str {
        self.get("description")
    }

    /// The title, or the description when the title is empty.
    pub fn title_or_description(&self) -> &str {
        match self.title() {
            "" => self.description(),
            title => title,
        }
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row::from_pairs(iter)
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let row = Row::from_pairs([("Title", "Login bug"), ("DESCRIPTION", "Cannot log in")]);

        assert_eq!(row.title(), "Login bug");
        assert_eq!(row.get("title"), "Login bug");
        assert_eq!(row.description(), "Cannot log in");
        assert!(row.contains("description"));
    }

    #[test]
    fn test_exact_match_wins() {
        let row = Row::from_pairs([("Title", "upper"), ("title", "lower")]);

        assert_eq!(row.get("title"), "lower");
        assert_eq!(row.get("Title"), "upper");
        assert_eq!(row.get("TITLE"), "upper");
    }

    #[test]
    fn test_missing_field_is_empty() {
        let row = Row::from_pairs([("title", "Login bug")]);

        assert_eq!(row.get("status"), "");
        assert_eq!(row.get_opt("status"), None);
        assert_eq!(row.description(), "");
    }

    #[test]
    fn test_title_or_description() {
        let row = Row::from_pairs([("title", ""), ("description", "Button color")]);
        assert_eq!(row.title_or_description(), "Button color");

        let row = Row::from_pairs([("title", "UI polish"), ("description", "Button color")]);
        assert_eq!(row.title_or_description(), "UI polish");
    }

    #[test]
    fn test_insert_replaces_exact_name() {
        let mut row = Row::new().with_field("status", "open");
        row.insert("status", "closed");
        row.insert("Status", "other");

        assert_eq!(row.len(), 2);
        assert_eq!(row.get("status"), "closed");
        assert_eq!(row.field_names().collect::<Vec<_>>(), vec!["status", "Status"]);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let row = Row::from_pairs([("title", "Login bug"), ("priority", "A")]);
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"title":"Login bug","priority":"A"}"#
        );
    }
}
