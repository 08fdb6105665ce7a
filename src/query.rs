//! Query parsing and boolean filtering.
//!
//! A query string is a sequence of term slots separated by the connectives
//! `AND`, `OR` and `NOT`. A slot is either free text or a field-scoped
//! `field:value` predicate.
//!
//! # Examples
//!
//! ```
//! use lexica::query::parse_query;
//! use lexica::query::boolean::BooleanOperator;
//!
//! let parsed = parse_query("status:open AND priority:A");
//! assert_eq!(parsed.predicates.len(), 2);
//! assert_eq!(parsed.predicates[0].field.as_deref(), Some("status"));
//! assert_eq!(parsed.predicates[1].value, "A");
//! assert_eq!(parsed.operators, vec![BooleanOperator::And]);
//! ```

pub mod boolean;
pub mod parser;

pub use boolean::BooleanOperator;
pub use parser::{ParsedQuery, QueryParser, QueryPredicate};

/// Parse a query string with the default parser.
pub fn parse_query(query: &str) -> ParsedQuery {
    QueryParser::new().parse(query)
}
