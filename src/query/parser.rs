//! Query parser for converting query strings into predicates and connectives.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::query::boolean::BooleanOperator;

lazy_static! {
    /// A connective with whitespace on both sides.
    static ref CONNECTIVE: Regex = Regex::new(r"(?i)\s+(AND|OR|NOT)\s+").unwrap();

    /// The first `field:value` pair inside a slot. Text before the field name
    /// is dropped.
    static ref FIELD_SCOPED: Regex = Regex::new(r"(\w+):(.*)").unwrap();
}

/// A single term slot of a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryPredicate {
    /// Lowercased field name for `field:value` slots, `None` for free text.
    pub field: Option<String>,
    /// The trimmed value to look for.
    pub value: String,
}

impl QueryPredicate {
    /// Create a free-text predicate.
    pub fn free_text<S: Into<String>>(value: S) -> Self {
        QueryPredicate {
            field: None,
            value: value.into(),
        }
    }

    /// Create a field-scoped predicate.
    pub fn field<F: Into<String>, S: Into<String>>(field: F, value: S) -> Self {
        QueryPredicate {
            field: Some(field.into()),
            value: value.into(),
        }
    }

    /// Whether this predicate is scoped to a field.
    pub fn is_field_scoped(&self) -> bool {
        self.field.is_some()
    }
}

/// The result of parsing a query string.
///
/// When there is at least one predicate, `operators.len() == predicates.len() - 1`
/// and `operators[i]` joins `predicates[i]` and `predicates[i + 1]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// Term slots in query order.
    pub predicates: Vec<QueryPredicate>,
    /// Connectives between consecutive slots.
    pub operators: Vec<BooleanOperator>,
}

impl ParsedQuery {
    /// Whether the query has no predicates at all.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// A structured query has at least one connective or at least one
    /// field-scoped predicate. Only structured queries filter rows.
    pub fn is_structured(&self) -> bool {
        !self.operators.is_empty() || self.predicates.iter().any(|p| p.is_field_scoped())
    }
}

/// Query parser.
///
/// Parsing never fails: anything that does not look like a connective or a
/// `field:value` slot is kept as free text.
#[derive(Clone, Debug, Default)]
pub struct QueryParser;

impl QueryParser {
    /// Create a new query parser.
    pub fn new() -> Self {
        QueryParser
    }

    /// Parse a query string.
    pub fn parse(&self, query: &str) -> ParsedQuery {
        let trimmed = query.trim();
        let mut parsed = ParsedQuery::default();

        if trimmed.is_empty() {
            return parsed;
        }

        let mut slot_start = 0;
        for captures in CONNECTIVE.captures_iter(trimmed) {
            let (Some(whole), Some(keyword)) = (captures.get(0), captures.get(1)) else {
                continue;
            };

            parsed
                .predicates
                .push(Self::parse_slot(&trimmed[slot_start..whole.start()]));
            if let Some(operator) = BooleanOperator::from_keyword(keyword.as_str()) {
                parsed.operators.push(operator);
            }
            slot_start = whole.end();
        }
        parsed
            .predicates
            .push(Self::parse_slot(&trimmed[slot_start..]));

        parsed
    }

    fn parse_slot(slot: &str) -> QueryPredicate {
        let slot = slot.trim();

        match FIELD_SCOPED.captures(slot) {
            Some(captures) => {
                let field = captures.get(1).map_or("", |m| m.as_str());
                let value = captures.get(2).map_or("", |m| m.as_str());
                QueryPredicate::field(field.to_lowercase(), value.trim())
            }
            None => QueryPredicate::free_text(slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_scoped_and() {
        let parsed = QueryParser::new().parse("status:open AND priority:A");

        assert_eq!(
            parsed.predicates,
            vec![
                QueryPredicate::field("status", "open"),
                QueryPredicate::field("priority", "A"),
            ]
        );
        assert_eq!(parsed.operators, vec![BooleanOperator::And]);
        assert!(parsed.is_structured());
    }

    #[test]
    fn test_connectives_are_case_insensitive() {
        let parsed = QueryParser::new().parse("login or payment not refund");

        assert_eq!(parsed.predicates.len(), 3);
        assert_eq!(
            parsed.operators,
            vec![BooleanOperator::Or, BooleanOperator::Not]
        );
        assert_eq!(parsed.predicates[2], QueryPredicate::free_text("refund"));
    }

    #[test]
    fn test_field_name_is_lowercased_value_kept() {
        let parsed = QueryParser::new().parse("Status: In Progress ");

        assert_eq!(
            parsed.predicates,
            vec![QueryPredicate::field("status", "In Progress")]
        );
        assert!(parsed.operators.is_empty());
    }

    #[test]
    fn test_plain_query_is_not_structured() {
        let parsed = QueryParser::new().parse("login bug");

        assert_eq!(parsed.predicates, vec![QueryPredicate::free_text("login bug")]);
        assert!(!parsed.is_structured());
    }

    #[test]
    fn test_blank_query() {
        let parsed = QueryParser::new().parse("   ");
        assert!(parsed.is_empty());
        assert!(parsed.operators.is_empty());
    }

    #[test]
    fn test_trailing_connective_stays_literal() {
        let parsed = QueryParser::new().parse("login AND ");

        assert_eq!(parsed.predicates, vec![QueryPredicate::free_text("login AND")]);
        assert!(parsed.operators.is_empty());
    }

    #[test]
    fn test_connective_inside_word_is_text() {
        let parsed = QueryParser::new().parse("brand ORANGE");
        assert_eq!(parsed.predicates.len(), 1);

        let parsed = QueryParser::new().parse("android notes");
        assert_eq!(parsed.predicates.len(), 1);
    }

    #[test]
    fn test_operator_count_invariant() {
        for query in ["a", "a AND b", "a OR b NOT c", "x:1 AND y:2 OR z"] {
            let parsed = QueryParser::new().parse(query);
            assert_eq!(parsed.operators.len(), parsed.predicates.len() - 1);
        }
    }

    #[test]
    fn test_field_pair_inside_slot() {
        let parsed = QueryParser::new().parse("login error:timeout");
        assert_eq!(
            parsed.predicates,
            vec![QueryPredicate::field("error", "timeout")]
        );
        assert!(parsed.is_structured());

        let parsed = QueryParser::new().parse("payment OR owner: Kim Lee:reviewer");
        assert_eq!(
            parsed.predicates,
            vec![
                QueryPredicate::free_text("payment"),
                QueryPredicate::field("owner", "Kim Lee:reviewer"),
            ]
        );
    }

    #[test]
    fn test_url_like_value() {
        let parsed = QueryParser::new().parse("link:https://example.com");
        assert_eq!(
            parsed.predicates,
            vec![QueryPredicate::field("link", "https://example.com")]
        );
    }
}
