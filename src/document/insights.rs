//! Corpus statistics: priority and status distributions.

use ahash::AHashMap;
use serde::Serialize;

use crate::document::row::Row;

/// Label counted for rows whose field is missing or empty.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// How many rows carry one value of a field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub name: String,
    pub value: usize,
}

/// Summary counts over a corpus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusInsights {
    pub total_rows: usize,
    pub priority_distribution: Vec<ValueCount>,
    pub status_distribution: Vec<ValueCount>,
}

/// Count the rows per distinct value of `field`.
///
/// Values are compared exactly and listed in order of first appearance.
/// Missing and empty values are counted as [`UNKNOWN_LABEL`].
///
/// ```
/// use lexica::document::insights::field_distribution;
/// use lexica::document::row::Row;
///
/// let rows = vec![
///     Row::from_pairs([("status", "open")]),
///     Row::from_pairs([("Status", "closed")]),
///     Row::from_pairs([("status", "open")]),
///     Row::new(),
/// ];
///
/// let counts: Vec<_> = field_distribution(&rows, "status")
///     .into_iter()
///     .map(|c| (c.name, c.value))
///     .collect();
/// assert_eq!(
///     counts,
///     vec![("open".to_string(), 2), ("closed".to_string(), 1), ("Unknown".to_string(), 1)]
/// );
/// ```
pub fn field_distribution(rows: &[Row], field: &str) -> Vec<ValueCount> {
    let mut positions: AHashMap<&str, usize> = AHashMap::new();
    let mut counts: Vec<ValueCount> = Vec::new();

    for row in rows {
        let value = match row.get(field) {
            "" => UNKNOWN_LABEL,
            value => value,
        };

        match positions.get(value).copied() {
            Some(position) => counts[position].value += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push(ValueCount {
                    name: value.to_string(),
                    value: 1,
                });
            }
        }
    }

    counts
}

/// Compute the priority and status distributions of a corpus.
pub fn corpus_insights(rows: &[Row]) -> CorpusInsights {
    CorpusInsights {
        total_rows: rows.len(),
        priority_distribution: field_distribution(rows, "priority"),
        status_distribution: field_distribution(rows, "status"),
    }
}
