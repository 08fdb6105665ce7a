//! Weighted document construction.

use crate::document::row::Row;
use crate::search::options::{DEFAULT_COLUMN_WEIGHT, DEFAULT_TITLE_WEIGHT, SearchOptions};

/// Build the text that represents `row` in the TF-IDF batch.
///
/// Every selected column's value is repeated `ceil(weight)` times and the
/// pieces are joined with single spaces. Without `searchColumns` the title
/// (default weight 2) and the description (default weight 1) are used.
/// Missing and empty columns contribute nothing.
///
/// ```
/// use lexica::document::build_document;
/// use lexica::document::row::Row;
/// use lexica::search::SearchOptions;
///
/// let row = Row::from_pairs([("title", "Login bug"), ("description", "Cannot authenticate")]);
/// assert_eq!(
///     build_document(&row, &SearchOptions::default()),
///     "Login bug Login bug Cannot authenticate"
/// );
/// ```
pub fn build_document(row: &Row, options: &SearchOptions) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if options.search_columns.is_empty() {
        push_weighted(
            &mut parts,
            row.title(),
            options.column_weight_or("title", DEFAULT_TITLE_WEIGHT),
        );
        push_weighted(
            &mut parts,
            row.description(),
            options.column_weight_or("description", DEFAULT_COLUMN_WEIGHT),
        );
    } else {
        for column in &options.search_columns {
            push_weighted(
                &mut parts,
                row.get(column),
                options.column_weight_or(column, DEFAULT_COLUMN_WEIGHT),
            );
        }
    }

    parts.join(" ")
}

fn push_weighted<'a>(parts: &mut Vec<&'a str>, value: &'a str, weight: f64) {
    if value.is_empty() {
        return;
    }

    let repeats = weight.ceil() as usize;
    parts.extend(std::iter::repeat_n(value, repeats));
}
