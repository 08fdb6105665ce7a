//! Rule-based row tagging.
//!
//! Tags are derived from the `priority` and `status` columns and from
//! keywords in the title and description. Matching is a case-insensitive
//! substring test, so `auth` also tags `authorization` and `ui` also tags
//! `build`.
//!
//! # Examples
//!
//! ```
//! use lexica::document::row::Row;
//! use lexica::document::tags::{Tag, generate_tags};
//!
//! let row = Row::from_pairs([
//!     ("Title", "Login bug"),
//!     ("Priority", "High"),
//! ]);
//! assert_eq!(
//!     generate_tags(&row),
//!     vec![Tag::HighPriority, Tag::Bug, Tag::Authentication]
//! );
//! ```

use std::fmt;

use serde::Serialize;

use crate::document::row::Row;

/// A generated row tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    HighPriority,
    Critical,
    Bug,
    Feature,
    Completed,
    Authentication,
    Ui,
    Backend,
    Mobile,
    Issue,
    Performance,
    Security,
}

impl Tag {
    /// The tag label, e.g. `high-priority`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::HighPriority => "high-priority",
            Tag::Critical => "critical",
            Tag::Bug => "bug",
            Tag::Feature => "feature",
            Tag::Completed => "completed",
            Tag::Authentication => "authentication",
            Tag::Ui => "ui",
            Tag::Backend => "backend",
            Tag::Mobile => "mobile",
            Tag::Issue => "issue",
            Tag::Performance => "performance",
            Tag::Security => "security",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which lowercased row text a rule looks at.
#[derive(Clone, Copy, Debug)]
enum Source {
    Priority,
    Status,
    Text,
}

/// A tag and the keywords that trigger it, checked in order.
struct TagRule {
    tag: Tag,
    triggers: &'static [(Source, &'static str)],
}

const TAG_RULES: &[TagRule] = &[
    TagRule {
        tag: Tag::HighPriority,
        triggers: &[(Source::Priority, "high"), (Source::Priority, "urgent")],
    },
    TagRule {
        tag: Tag::Critical,
        triggers: &[(Source::Priority, "critical")],
    },
    TagRule {
        tag: Tag::Bug,
        triggers: &[(Source::Status, "bug"), (Source::Text, "bug")],
    },
    TagRule {
        tag: Tag::Feature,
        triggers: &[(Source::Status, "feature"), (Source::Text, "feature")],
    },
    TagRule {
        tag: Tag::Completed,
        triggers: &[(Source::Status, "done"), (Source::Status, "complete")],
    },
    TagRule {
        tag: Tag::Authentication,
        triggers: &[(Source::Text, "login"), (Source::Text, "auth")],
    },
    TagRule {
        tag: Tag::Ui,
        triggers: &[(Source::Text, "ui"), (Source::Text, "interface")],
    },
    TagRule {
        tag: Tag::Backend,
        triggers: &[(Source::Text, "api"), (Source::Text, "backend")],
    },
    TagRule {
        tag: Tag::Mobile,
        triggers: &[(Source::Text, "mobile"), (Source::Text, "responsive")],
    },
    TagRule {
        tag: Tag::Issue,
        triggers: &[(Source::Text, "error"), (Source::Text, "issue")],
    },
    TagRule {
        tag: Tag::Performance,
        triggers: &[(Source::Text, "performance"), (Source::Text, "slow")],
    },
    TagRule {
        tag: Tag::Security,
        triggers: &[(Source::Text, "security"), (Source::Text, "vulnerability")],
    },
];

/// Generate the tags of a row in rule order. Each tag appears at most once.
pub fn generate_tags(row: &Row) -> Vec<Tag> {
    let priority = row.get("priority").to_lowercase();
    let status = row.get("status").to_lowercase();
    let text = format!("{} {}", row.title(), row.description()).to_lowercase();

    TAG_RULES
        .iter()
        .filter(|rule| {
            rule.triggers.iter().any(|(source, keyword)| {
                let haystack = match source {
                    Source::Priority => &priority,
                    Source::Status => &status,
                    Source::Text => &text,
                };
                haystack.contains(keyword)
            })
        })
        .map(|rule| rule.tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_tags() {
        let row = Row::from_pairs([("title", "Checkout"), ("priority", "Urgent / Critical")]);
        assert_eq!(generate_tags(&row), vec![Tag::HighPriority, Tag::Critical]);
    }

    #[test]
    fn test_status_tags() {
        let row = Row::from_pairs([("title", "Dark mode"), ("Status", "Feature - Done")]);
        assert_eq!(generate_tags(&row), vec![Tag::Feature, Tag::Completed]);

        let row = Row::from_pairs([("title", "Crash"), ("status", "bug")]);
        assert_eq!(generate_tags(&row), vec![Tag::Bug]);
    }

    #[test]
    fn test_content_tags() {
        let row = Row::from_pairs([
            ("title", "Slow API response"),
            ("description", "Security issue on the mobile interface"),
        ]);

        assert_eq!(
            generate_tags(&row),
            vec![
                Tag::Ui,
                Tag::Backend,
                Tag::Mobile,
                Tag::Issue,
                Tag::Performance,
                Tag::Security,
            ]
        );
    }

    #[test]
    fn test_keywords_match_substrings() {
        let row = Row::from_pairs([("title", "Authorization build")]);
        assert_eq!(generate_tags(&row), vec![Tag::Authentication, Tag::Ui]);
    }

    #[test]
    fn test_each_tag_once() {
        let row = Row::from_pairs([
            ("title", "Login bug"),
            ("description", "Login fails with a bug"),
            ("status", "bug"),
        ]);
        assert_eq!(generate_tags(&row), vec![Tag::Bug, Tag::Authentication]);
    }

    #[test]
    fn test_untagged_row() {
        let row = Row::from_pairs([("title", "Color tweak"), ("priority", "low")]);
        assert!(generate_tags(&row).is_empty());
        assert!(generate_tags(&Row::new()).is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tag::HighPriority.to_string(), "high-priority");
        assert_eq!(
            serde_json::to_string(&Tag::Authentication).unwrap(),
            "\"authentication\""
        );
    }
}
