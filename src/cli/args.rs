//! Command line argument parsing for the Lexica CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::language::Language;
use crate::error::{LexicaError, Result};
use crate::search::engine::DEFAULT_MAX_RESULTS;
use crate::search::options::{MAX_COLUMN_WEIGHT, SearchOptions, is_valid_weight};

/// Lexica - in-memory lexical search over CSV and JSON Lines rows
#[derive(Parser, Debug, Clone)]
#[command(name = "lexica")]
#[command(about = "In-memory lexical search and ranking over structured rows")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexicaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexicaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the rows of one or more files against a query
    Search(SearchArgs),

    /// Show how a query is split into predicates and operators
    Parse(ParseArgs),

    /// List the columns available in one or more files
    Columns(InputArgs),

    /// Check that files can be searched
    Validate(InputArgs),

    /// Generate rule-based tags for every row
    Tags(InputArgs),

    /// Show priority and status distributions
    Stats(InputArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Row files (CSV, or JSON Lines with a .jsonl extension)
    #[arg(short, long = "input", value_name = "FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Query string
    #[arg(long, value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Blend typo-tolerant fuzzy matching into the score
    #[arg(long)]
    pub fuzzy: bool,

    /// Column to search (repeatable; default: title and description)
    #[arg(short, long = "column", value_name = "COLUMN")]
    pub columns: Vec<String>,

    /// Column weight as FIELD=WEIGHT (repeatable)
    #[arg(short, long = "weight", value_name = "FIELD=WEIGHT", value_parser = parse_weight)]
    pub weights: Vec<(String, f64)>,

    /// Only search rows in this language (ko or en)
    #[arg(long)]
    pub language: Option<Language>,

    /// JSON file with search options; flags override its values
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,
}

impl SearchArgs {
    /// Build the search options from the options file and the flags.
    pub fn search_options(&self) -> Result<SearchOptions> {
        let mut options = match &self.options {
            Some(path) => SearchOptions::from_file(path)?,
            None => SearchOptions::default(),
        };

        if self.fuzzy {
            options.fuzzy_search = true;
        }
        if !self.columns.is_empty() {
            options.search_columns = self.columns.clone();
        }
        for (field, weight) in &self.weights {
            options.column_weights.insert(field.clone(), *weight);
        }
        if let Some(language) = self.language {
            options.language = Some(language);
        }

        Ok(options)
    }
}

/// Arguments for parsing a query
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for commands that only read files
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Row files (CSV, or JSON Lines with a .jsonl extension)
    #[arg(short, long = "input", value_name = "FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Parse a `FIELD=WEIGHT` pair.
pub fn parse_weight(value: &str) -> Result<(String, f64)> {
    let (field, weight) = value
        .split_once('=')
        .ok_or_else(|| LexicaError::config(format!("Expected FIELD=WEIGHT, got {value:?}")))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(LexicaError::config(format!("Missing field name in {value:?}")));
    }

    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|e| LexicaError::config(format!("Invalid weight in {value:?}: {e}")))?;

    if !is_valid_weight(weight) {
        return Err(LexicaError::config(format!(
            "Weight in {value:?} must be in (0, {MAX_COLUMN_WEIGHT}]"
        )));
    }

    Ok((field.to_string(), weight))
}
