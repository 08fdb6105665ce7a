//! Output formatting for CLI commands.

use std::fmt::Write;

use serde::Serialize;

use crate::cli::args::{LexicaArgs, OutputFormat};
use crate::document::insights::{CorpusInsights, ValueCount};
use crate::document::tags::Tag;
use crate::document::validation::ValidationReport;
use crate::error::Result;
use crate::query::parser::ParsedQuery;
use crate::search::result::SearchResult;

/// Types that can be printed for people as well as serialized.
pub trait HumanReadable {
    /// Render the value as plain text.
    fn to_human(&self) -> String;
}

/// Result structure for a search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport<'a> {
    pub query: String,
    pub total_rows: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResult<'a>>,
}

/// Result structure for column discovery.
#[derive(Debug, Serialize)]
pub struct ColumnsReport {
    pub files: Vec<String>,
    pub columns: Vec<String>,
}

/// Validation outcome of one file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileValidation {
    pub file: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ValidationReport>,
}

/// Validation outcomes of every input file.
#[derive(Debug, Serialize)]
pub struct ValidationSummary {
    pub files: Vec<FileValidation>,
}

impl ValidationSummary {
    /// Number of files that failed validation.
    pub fn failures(&self) -> usize {
        self.files.iter().filter(|f| !f.valid).count()
    }
}

/// Tags of one row.
#[derive(Debug, Serialize)]
pub struct RowTags {
    pub index: usize,
    pub title: String,
    pub tags: Vec<Tag>,
}

/// Result structure for tag generation. Rows without tags are left out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagsReport {
    pub total_rows: usize,
    pub rows: Vec<RowTags>,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T>(message: &str, result: &T, args: &LexicaArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            print!("{}", result.to_human());
        }
        OutputFormat::Json => println!("{}", to_json(result, args.pretty)?),
    }

    Ok(())
}

/// Serialize a result as JSON.
pub fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

impl HumanReadable for SearchReport<'_> {
    fn to_human(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Found {} results in {} rows ({} ms)",
            self.results.len(),
            self.total_rows,
            self.duration_ms
        );

        for (i, result) in self.results.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Result {}: (Score: {:.3})", i + 1, result.score);
            let _ = writeln!(out, "  Row: {}", result.index);
            if !result.highlighted_title.is_empty() {
                let _ = writeln!(out, "  Title: {}", result.highlighted_title);
            }
            if !result.highlighted_description.is_empty() {
                let _ = writeln!(out, "  Description: {}", result.highlighted_description);
            }
        }

        out
    }
}

impl HumanReadable for ParsedQuery {
    fn to_human(&self) -> String {
        let mut out = String::new();

        if self.is_empty() {
            let _ = writeln!(out, "Empty query");
            return out;
        }

        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                let _ = writeln!(out, "  {}", self.operators[i - 1]);
            }
            match &predicate.field {
                Some(field) => {
                    let _ = writeln!(out, "{field}: {:?}", predicate.value);
                }
                None => {
                    let _ = writeln!(out, "{:?}", predicate.value);
                }
            }
        }
        let _ = writeln!(
            out,
            "Structured: {}",
            if self.is_structured() { "yes" } else { "no" }
        );

        out
    }
}

impl HumanReadable for ColumnsReport {
    fn to_human(&self) -> String {
        self.columns.iter().map(|c| format!("{c}\n")).collect()
    }
}

impl HumanReadable for ValidationSummary {
    fn to_human(&self) -> String {
        let mut out = String::new();

        for file in &self.files {
            match (&file.report, &file.error) {
                (Some(report), _) => {
                    let _ = write!(out, "OK    {} ({} rows", file.file, report.row_count);
                    if !report.missing_columns.is_empty() {
                        let _ = write!(out, ", no {}", report.missing_columns.join(", "));
                    }
                    let _ = writeln!(out, ")");
                }
                (None, error) => {
                    let _ = writeln!(
                        out,
                        "FAIL  {}: {}",
                        file.file,
                        error.as_deref().unwrap_or("invalid")
                    );
                }
            }
        }

        out
    }
}

impl HumanReadable for TagsReport {
    fn to_human(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Tagged {} of {} rows",
            self.rows.len(),
            self.total_rows
        );
        for row in &self.rows {
            let tags: Vec<String> = row.tags.iter().map(|tag| format!("#{tag}")).collect();
            let _ = writeln!(out, "{:>5}  {}  {}", row.index, row.title, tags.join(" "));
        }

        out
    }
}

fn write_distribution(out: &mut String, heading: &str, counts: &[ValueCount]) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{heading}:");
    for count in counts {
        let _ = writeln!(out, "  {}: {}", count.name, count.value);
    }
}

impl HumanReadable for CorpusInsights {
    fn to_human(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Total rows: {}", self.total_rows);
        write_distribution(&mut out, "Priority", &self.priority_distribution);
        write_distribution(&mut out, "Status", &self.status_distribution);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::row::Row;
    use crate::query::parse_query;

    #[test]
    fn test_search_report_human() {
        let row = Row::from_pairs([("title", "Login bug"), ("description", "")]);
        let report = SearchReport {
            query: "login".to_string(),
            total_rows: 2,
            duration_ms: 1,
            results: vec![SearchResult {
                index: 0,
                row: &row,
                score: 0.5,
                highlighted_title: "<mark>Login</mark> bug".to_string(),
                highlighted_description: String::new(),
            }],
        };

        let text = report.to_human();
        assert!(text.starts_with("Found 1 results in 2 rows"));
        assert!(text.contains("Result 1: (Score: 0.500)"));
        assert!(text.contains("  Title: <mark>Login</mark> bug"));
        assert!(!text.contains("Description"));
    }

    #[test]
    fn test_search_report_json() {
        let row = Row::from_pairs([("title", "Login bug")]);
        let report = SearchReport {
            query: "login".to_string(),
            total_rows: 1,
            duration_ms: 0,
            results: vec![SearchResult {
                index: 0,
                row: &row,
                score: 0.25,
                highlighted_title: "<mark>Login</mark> bug".to_string(),
                highlighted_description: String::new(),
            }],
        };

        let json = to_json(&report, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totalRows"], 1);
        assert_eq!(value["results"][0]["row"]["title"], "Login bug");
        assert_eq!(value["results"][0]["highlightedTitle"], "<mark>Login</mark> bug");
    }

    #[test]
    fn test_parsed_query_human() {
        let text = parse_query("status:open AND login").to_human();
        assert_eq!(text, "status: \"open\"\n  AND\n\"login\"\nStructured: yes\n");
    }

    #[test]
    fn test_tags_report() {
        let report = TagsReport {
            total_rows: 2,
            rows: vec![RowTags {
                index: 0,
                title: "Login bug".to_string(),
                tags: vec![Tag::Bug, Tag::Authentication],
            }],
        };

        assert_eq!(
            report.to_human(),
            "Tagged 1 of 2 rows\n    0  Login bug  #bug #authentication\n"
        );

        let json = to_json(&report, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totalRows"], 2);
        assert_eq!(value["rows"][0]["tags"][1], "authentication");
    }

    #[test]
    fn test_insights_human() {
        let rows = vec![
            Row::from_pairs([("title", "Login bug"), ("priority", "A"), ("status", "open")]),
            Row::from_pairs([("title", "UI polish"), ("priority", "A")]),
        ];
        let text = crate::document::insights::corpus_insights(&rows).to_human();

        assert_eq!(
            text,
            "Total rows: 2\n\nPriority:\n  A: 2\n\nStatus:\n  open: 1\n  Unknown: 1\n"
        );
    }

    #[test]
    fn test_validation_summary() {
        let summary = ValidationSummary {
            files: vec![
                FileValidation {
                    file: "a.csv".to_string(),
                    valid: true,
                    error: None,
                    report: Some(ValidationReport {
                        row_count: 3,
                        columns: vec!["title".to_string()],
                        missing_columns: vec!["description".to_string()],
                    }),
                },
                FileValidation {
                    file: "b.csv".to_string(),
                    valid: false,
                    error: Some("empty".to_string()),
                    report: None,
                },
            ],
        };

        assert_eq!(summary.failures(), 1);
        assert_eq!(
            summary.to_human(),
            "OK    a.csv (3 rows, no description)\nFAIL  b.csv: empty\n"
        );
    }
}
