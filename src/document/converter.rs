//! Row converters for loading a corpus from files.
//!
//! # Example
//!
//! ```no_run
//! use lexica::document::converter::RowConverter;
//! use lexica::document::converter::csv::CsvRowConverter;
//! use lexica::document::converter::jsonl::JsonlRowConverter;
//!
//! for row in CsvRowConverter::new().convert("tickets.csv").unwrap() {
//!     println!("{:?}", row.unwrap());
//! }
//!
//! let rows = lexica::document::converter::load_rows("tickets.jsonl").unwrap();
//! println!("{} rows", rows.len());
//! ```

use std::path::Path;

use log::debug;

use crate::document::row::Row;
use crate::error::Result;

pub mod csv;
pub mod jsonl;

use self::csv::CsvRowConverter;
use self::jsonl::JsonlRowConverter;

/// A trait for converting files into rows.
pub trait RowConverter {
    /// The iterator type that yields rows.
    type Iter: Iterator<Item = Result<Row>>;

    /// Open a file and iterate over its rows.
    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter>;
}

/// Load every row of a file, picking the converter from the extension.
///
/// `.jsonl` and `.ndjson` files are read as JSON Lines, anything else as CSV.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let rows = match extension.as_deref() {
        Some("jsonl") | Some("ndjson") => JsonlRowConverter::new()
            .convert(path)?
            .collect::<Result<Vec<_>>>()?,
        _ => CsvRowConverter::new()
            .convert(path)?
            .collect::<Result<Vec<_>>>()?,
    };

    debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
