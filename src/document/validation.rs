//! Corpus validation and dataset helpers.

use std::collections::BTreeSet;

use log::warn;
use serde::Serialize;

use crate::document::row::Row;
use crate::error::{LexicaError, Result};

/// Field added by [`combine_datasets`] to record where a row came from.
pub const FILE_NAME_FIELD: &str = "_fileName";

const REQUIRED_COLUMNS: [&str; 2] = ["title", "description"];

/// Outcome of a successful validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Number of rows in the corpus.
    pub row_count: usize,
    /// Columns of the first row.
    pub columns: Vec<String>,
    /// Which of `title` and `description` are absent.
    pub missing_columns: Vec<String>,
}

/// Check that a corpus can be searched.
///
/// The corpus must not be empty and its first row must have a `title` or a
/// `description` column (in any letter case). A corpus with only one of the
/// two is accepted, and the other is listed in the report.
///
/// ```
/// use lexica::document::row::Row;
/// use lexica::document::validate_corpus;
///
/// let rows = vec![Row::from_pairs([("Title", "Login bug")])];
/// let report = validate_corpus(&rows, Some("tickets.csv")).unwrap();
/// assert_eq!(report.missing_columns, vec!["description"]);
///
/// let err = validate_corpus(&[], Some("empty.csv")).unwrap_err();
/// assert!(err.to_string().contains("\"empty.csv\" is empty or invalid"));
/// ```
pub fn validate_corpus(rows: &[Row], name: Option<&str>) -> Result<ValidationReport> {
    let label = match name {
        Some(name) => format!("Dataset \"{name}\""),
        None => "Dataset".to_string(),
    };

    let Some(first) = rows.first() else {
        return Err(LexicaError::validation(format!(
            "{label} is empty or invalid"
        )));
    };

    let missing_columns: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !first.contains(column))
        .map(|column| column.to_string())
        .collect();

    if missing_columns.len() == REQUIRED_COLUMNS.len() {
        return Err(LexicaError::validation(format!(
            "{label} must contain at least a \"title\" or \"description\" column"
        )));
    }

    if !missing_columns.is_empty() {
        warn!("{label} has no {} column", missing_columns.join(", "));
    }

    Ok(ValidationReport {
        row_count: rows.len(),
        columns: first.field_names().map(str::to_string).collect(),
        missing_columns,
    })
}

/// Concatenate named datasets, tagging every row with its source in
/// [`FILE_NAME_FIELD`].
pub fn combine_datasets<I>(datasets: I) -> Vec<Row>
where
    I: IntoIterator<Item = (String, Vec<Row>)>,
{
    datasets
        .into_iter()
        .flat_map(|(file_name, rows)| {
            rows.into_iter()
                .map(move |row| row.with_field(FILE_NAME_FIELD, file_name.clone()))
        })
        .collect()
}

/// All column names used by any row, sorted, without [`FILE_NAME_FIELD`].
pub fn available_columns(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.field_names())
        .filter(|name| *name != FILE_NAME_FIELD)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
