//! Utility functions and helpers.

pub mod levenshtein;
