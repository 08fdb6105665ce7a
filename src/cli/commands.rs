//! Command implementations for the Lexica CLI.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::converter::load_rows;
use crate::document::insights::corpus_insights;
use crate::document::row::Row;
use crate::document::tags::generate_tags;
use crate::document::validation::{available_columns, combine_datasets, validate_corpus};
use crate::error::{LexicaError, Result};
use crate::query::parse_query;
use crate::search::engine::SearchEngine;

/// Execute a CLI command.
pub fn execute_command(args: LexicaArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args, &args),
        Command::Parse(parse_args) => run_parse(parse_args, &args),
        Command::Columns(input_args) => list_columns(input_args, &args),
        Command::Validate(input_args) => validate_files(input_args, &args),
        Command::Tags(input_args) => tag_rows(input_args, &args),
        Command::Stats(input_args) => show_stats(input_args, &args),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load, validate and combine the given files.
pub fn load_corpus(inputs: &[PathBuf]) -> Result<Vec<Row>> {
    let mut datasets = Vec::with_capacity(inputs.len());

    for path in inputs {
        let name = display_name(path);
        let rows = load_rows(path)?;
        validate_corpus(&rows, Some(&name))?;
        datasets.push((name, rows));
    }

    let corpus = combine_datasets(datasets);
    info!("Loaded {} rows from {} files", corpus.len(), inputs.len());
    Ok(corpus)
}

fn run_search(args: &SearchArgs, cli_args: &LexicaArgs) -> Result<()> {
    let options = args.search_options()?;
    let corpus = load_corpus(&args.inputs)?;

    let start_time = Instant::now();
    let results = SearchEngine::new().search(&corpus, &args.query, args.max_results, &options);
    let duration = start_time.elapsed();
    info!("Search took {duration:?}");

    output_result(
        "Search completed",
        &SearchReport {
            query: args.query.clone(),
            total_rows: corpus.len(),
            duration_ms: duration.as_millis() as u64,
            results,
        },
        cli_args,
    )
}

fn run_parse(args: &ParseArgs, cli_args: &LexicaArgs) -> Result<()> {
    output_result("Parsed query", &parse_query(&args.query), cli_args)
}

fn list_columns(args: &InputArgs, cli_args: &LexicaArgs) -> Result<()> {
    let corpus = load_corpus(&args.inputs)?;

    output_result(
        "Available columns",
        &ColumnsReport {
            files: args.inputs.iter().map(|p| display_name(p)).collect(),
            columns: available_columns(&corpus),
        },
        cli_args,
    )
}

fn validate_files(args: &InputArgs, cli_args: &LexicaArgs) -> Result<()> {
    let files = args
        .inputs
        .iter()
        .map(|path| {
            let name = display_name(path);
            let outcome = load_rows(path).and_then(|rows| validate_corpus(&rows, Some(&name)));
            match outcome {
                Ok(report) => FileValidation {
                    file: name,
                    valid: true,
                    error: None,
                    report: Some(report),
                },
                Err(e) => FileValidation {
                    file: name,
                    valid: false,
                    error: Some(e.to_string()),
                    report: None,
                },
            }
        })
        .collect();

    let summary = ValidationSummary { files };
    output_result("Validation finished", &summary, cli_args)?;

    match summary.failures() {
        0 => Ok(()),
        n => Err(LexicaError::validation(format!(
            "{n} of {} files failed validation",
            summary.files.len()
        ))),
    }
}

/// Tag every row of the combined corpus.
pub fn build_tags_report(corpus: &[Row]) -> TagsReport {
    let rows = corpus
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let tags = generate_tags(row);
            (!tags.is_empty()).then(|| RowTags {
                index,
                title: row.title_or_description().to_string(),
                tags,
            })
        })
        .collect();

    TagsReport {
        total_rows: corpus.len(),
        rows,
    }
}

fn tag_rows(args: &InputArgs, cli_args: &LexicaArgs) -> Result<()> {
    let corpus = load_corpus(&args.inputs)?;
    let report = build_tags_report(&corpus);
    info!("Tagged {} of {} rows", report.rows.len(), report.total_rows);

    output_result("Generated tags", &report, cli_args)
}

fn show_stats(args: &InputArgs, cli_args: &LexicaArgs) -> Result<()> {
    let corpus = load_corpus(&args.inputs)?;
    output_result("Corpus statistics", &corpus_insights(&corpus), cli_args)
}
