//! Synonym dictionary for term expansion.
//!
//! Synonyms are declared as groups of mutually equivalent terms. Every member
//! of a group maps to every other member of that group, so the relation is
//! symmetric by construction.
//!
//! The built-in dictionary is a static, read-only table shared by every
//! analyzer; nothing mutates it at runtime.
//!
//! # Examples
//!
//! ```
//! use lexica::analysis::synonym::SynonymDictionary;
//!
//! let dictionary = SynonymDictionary::builtin();
//! let synonyms = dictionary.lookup("bug").unwrap();
//! assert!(synonyms.contains(&"defect".to_string()));
//! assert!(dictionary.lookup("defect").unwrap().contains(&"bug".to_string()));
//! ```

use ahash::AHashMap;
use lazy_static::lazy_static;

/// Synonym groups of the built-in dictionary.
pub const BUILTIN_SYNONYM_GROUPS: &[&[&str]] = &[
    &["bug", "issue", "error", "problem", "defect"],
    &["feature", "enhancement", "improvement"],
    &["open", "active", "in progress"],
    &["closed", "resolved", "done", "complete"],
];

lazy_static! {
    static ref BUILTIN: SynonymDictionary = SynonymDictionary::from_synonym_groups(
        BUILTIN_SYNONYM_GROUPS
            .iter()
            .map(|group| group.iter().map(|term| term.to_string()).collect())
            .collect()
    );
}

/// Synonym dictionary for token expansion.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    /// term -> synonyms, in group order
    synonyms: AHashMap<String, Vec<String>>,
}

impl SynonymDictionary {
    /// The built-in dictionary.
    pub fn builtin() -> &'static SynonymDictionary {
        &BUILTIN
    }

    /// Build a synonym dictionary from synonym groups.
    ///
    /// Terms are lowercased. A term listed in several groups collects the
    /// synonyms of all of them.
    pub fn from_synonym_groups(synonym_groups: Vec<Vec<String>>) -> Self {
        let mut synonyms: AHashMap<String, Vec<String>> = AHashMap::new();

        for group in synonym_groups {
            let group: Vec<String> = group
                .into_iter()
                .map(|term| term.trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect();

            // Create bidirectional mappings
            for (i, term) in group.iter().enumerate() {
                let entry = synonyms.entry(term.clone()).or_default();
                for (j, other_term) in group.iter().enumerate() {
                    if i != j && other_term != term && !entry.contains(other_term) {
                        entry.push(other_term.clone());
                    }
                }
            }
        }

        Self { synonyms }
    }

    /// Look up the synonyms of a term.
    pub fn lookup(&self, term: &str) -> Option<&[String]> {
        self.synonyms
            .get(term)
            .map(Vec::as_slice)
            .filter(|synonyms| !synonyms.is_empty())
    }

    /// Number of terms with at least one synonym.
    pub fn len(&self) -> usize {
        self.synonyms.values().filter(|s| !s.is_empty()).count()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
