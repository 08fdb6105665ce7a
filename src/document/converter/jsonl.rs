//! JSONL row converter.
//!
//! Each non-empty line holds one JSON object:
//! ```jsonl
//! {"title": "Login bug", "description": "Cannot authenticate", "priority": 1}
//! {"title": "UI polish", "description": "Button color"}
//! ```
//!
//! String values are kept as they are, `null` becomes the empty string, and
//! every other value is stored as its JSON text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::document::converter::RowConverter;
use crate::document::row::Row;
use crate::error::{LexicaError, Result};

/// A row converter for JSON Lines files.
#[derive(Clone, Debug, Default)]
pub struct JsonlRowConverter;

impl JsonlRowConverter {
    /// Create a new JSONL converter.
    pub fn new() -> Self {
        JsonlRowConverter
    }

    /// Parse a single JSON line into a row.
    pub fn parse_line(&self, line: &str) -> Result<Row> {
        let Value::Object(map) = serde_json::from_str::<Value>(line)? else {
            return Err(LexicaError::other(format!(
                "Expected a JSON object, got: {line}"
            )));
        };

        Ok(map
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect())
    }
}

/// Iterator over JSONL rows.
pub struct JsonlRowIterator {
    reader: BufReader<File>,
    converter: JsonlRowConverter,
}

impl Iterator for JsonlRowIterator {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(self.converter.parse_line(line));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

impl RowConverter for JsonlRowConverter {
    type Iter = JsonlRowIterator;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let file = File::open(path.as_ref())?;

        Ok(JsonlRowIterator {
            reader: BufReader::new(file),
            converter: self.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_line_value_types() {
        let line = r#"{"title":"Login bug","priority":1,"open":true,"owner":null,"tags":["auth"]}"#;
        let row = JsonlRowConverter::new().parse_line(line).unwrap();

        assert_eq!(row.title(), "Login bug");
        assert_eq!(row.get("priority"), "1");
        assert_eq!(row.get("open"), "true");
        assert_eq!(row.get("owner"), "");
        assert_eq!(row.get("tags"), r#"["auth"]"#);
    }

    #[test]
    fn test_parse_line_rejects_non_objects() {
        let converter = JsonlRowConverter::new();
        assert!(matches!(converter.parse_line("[1, 2]"), Err(LexicaError::Other(_))));
        assert!(matches!(converter.parse_line("{broken"), Err(LexicaError::Json(_))));
    }

    #[test]
    fn test_jsonl_multiple_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"title": "Login bug"}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"title": "UI polish"}}"#).unwrap();
        file.flush().unwrap();

        let rows: Vec<Row> = JsonlRowConverter::new()
            .convert(file.path())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].title(), "UI polish");
    }
}
