//! Search results.

use serde::Serialize;

use crate::document::row::Row;

/// A ranked row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    /// Position of the row in the corpus.
    pub index: usize,
    /// The row itself.
    pub row: &'a Row,
    /// Relevance score. Only the ordering between results is meaningful.
    pub score: f64,
    /// Title with query terms marked.
    pub highlighted_title: String,
    /// Description with query terms marked.
    pub highlighted_description: String,
}
