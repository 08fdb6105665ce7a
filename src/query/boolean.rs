//! Boolean connectives and row filtering.

use std::fmt;

use serde::Serialize;

use crate::document::row::Row;
use crate::query::parser::{ParsedQuery, QueryPredicate};

/// Connective between two query slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BooleanOperator {
    /// Both sides must match.
    And,
    /// Either side may match.
    Or,
    /// The running result must match and the next slot must not.
    Not,
}

impl BooleanOperator {
    /// Parse a connective keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "AND" => Some(BooleanOperator::And),
            "OR" => Some(BooleanOperator::Or),
            "NOT" => Some(BooleanOperator::Not),
            _ => None,
        }
    }

    /// Combine the running result with the next predicate's truth value.
    pub fn apply(self, acc: bool, next: bool) -> bool {
        match self {
            BooleanOperator::And => acc && next,
            BooleanOperator::Or => acc || next,
            BooleanOperator::Not => acc && !next,
        }
    }

    /// The keyword for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOperator::And => "AND",
            BooleanOperator::Or => "OR",
            BooleanOperator::Not => "NOT",
        }
    }
}

impl fmt::Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryPredicate {
    /// Whether the row satisfies this predicate.
    ///
    /// A field-scoped predicate looks for the value in that field; free text
    /// looks in the title and description. Both compare case-insensitively
    /// by substring.
    pub fn matches(&self, row: &Row) -> bool {
        let needle = self.value.to_lowercase();

        match &self.field {
            Some(field) => row.get(field).to_lowercase().contains(&needle),
            None => format!("{} {}", row.title(), row.description())
                .to_lowercase()
                .contains(&needle),
        }
    }
}

impl ParsedQuery {
    /// Evaluate the query against a row, folding left to right.
    ///
    /// There is no precedence: `a OR b AND c` is `(a OR b) AND c`. A query
    /// without predicates matches every row.
    pub fn matches(&self, row: &Row) -> bool {
        let Some((first, rest)) = self.predicates.split_first() else {
            return true;
        };

        rest.iter()
            .zip(&self.operators)
            .fold(first.matches(row), |acc, (predicate, operator)| {
                operator.apply(acc, predicate.matches(row))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;

    fn ticket(title: &str, description: &str, status: &str) -> Row {
        Row::from_pairs([
            ("title", title),
            ("description", description),
            ("status", status),
        ])
    }

    #[test]
    fn test_apply() {
        assert!(BooleanOperator::And.apply(true, true));
        assert!(!BooleanOperator::And.apply(true, false));
        assert!(BooleanOperator::Or.apply(false, true));
        assert!(BooleanOperator::Not.apply(true, false));
        assert!(!BooleanOperator::Not.apply(false, false));
    }

    #[test]
    fn test_field_predicate() {
        let row = ticket("Login bug", "Cannot authenticate", "Open");

        assert!(QueryPredicate::field("status", "open").matches(&row));
        assert!(!QueryPredicate::field("status", "closed").matches(&row));
        assert!(!QueryPredicate::field("owner", "alice").matches(&row));
    }

    #[test]
    fn test_free_text_spans_title_and_description() {
        let row = ticket("Login bug", "Cannot authenticate", "Open");

        assert!(QueryPredicate::free_text("BUG cannot").matches(&row));
        assert!(!QueryPredicate::free_text("open").matches(&row));
    }

    #[test]
    fn test_left_to_right_fold() {
        let row = ticket("Login bug", "Cannot authenticate", "Open");

        assert!(parse_query("status:open AND login").matches(&row));
        assert!(!parse_query("status:open NOT login").matches(&row));
        assert!(parse_query("status:closed OR login").matches(&row));
        // (closed OR login) AND payment
        assert!(!parse_query("status:closed OR login AND payment").matches(&row));
    }

    #[test]
    fn test_empty_query_matches() {
        let row = ticket("Login bug", "", "");
        assert!(parse_query("").matches(&row));
    }

    #[test]
    fn test_operator_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&BooleanOperator::Not).unwrap(),
            "\"NOT\""
        );
        assert_eq!(BooleanOperator::from_keyword("or"), Some(BooleanOperator::Or));
        assert_eq!(BooleanOperator::from_keyword("XOR"), None);
    }
}
