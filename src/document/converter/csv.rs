//! CSV row converter.
//!
//! The first record is the header with the field names:
//! ```csv
//! title,description,status
//! Login bug,Cannot authenticate,open
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};

use crate::document::converter::RowConverter;
use crate::document::row::Row;
use crate::error::{LexicaError, Result};

/// A row converter for CSV files.
///
/// Values are trimmed, and records shorter than the header are accepted
/// (the missing fields read as empty).
#[derive(Clone, Debug)]
pub struct CsvRowConverter {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
    /// Whether to trim whitespace from fields
    trim: bool,
}

impl Default for CsvRowConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRowConverter {
    /// Create a new CSV converter with comma delimiter.
    pub fn new() -> Self {
        CsvRowConverter {
            delimiter: b',',
            trim: true,
        }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace from fields.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Convert CSV text held in memory.
    pub fn convert_str(&self, input: &str) -> Result<Vec<Row>> {
        CsvRowIterator::new(self.reader(input.as_bytes()))?.collect()
    }

    fn reader<R: Read>(&self, input: R) -> Reader<R> {
        ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true)
            .from_reader(input)
    }
}

/// Iterator over the rows of a CSV source.
pub struct CsvRowIterator<R> {
    headers: StringRecord,
    records: StringRecordsIntoIter<R>,
}

impl<R: Read> CsvRowIterator<R> {
    fn new(mut reader: Reader<R>) -> Result<Self> {
        let headers = reader.headers()?.clone();
        if headers.iter().all(str::is_empty) {
            return Err(LexicaError::other("CSV header is empty"));
        }

        Ok(CsvRowIterator {
            headers,
            records: reader.into_records(),
        })
    }
}

impl<R: Read> Iterator for CsvRowIterator<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        Some(Ok(self
            .headers
            .iter()
            .zip(record.iter().chain(std::iter::repeat("")))
            .filter(|(header, _)| !header.is_empty())
            .collect()))
    }
}

impl RowConverter for CsvRowConverter {
    type Iter = CsvRowIterator<File>;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let file = File::open(path.as_ref())?;
        CsvRowIterator::new(self.reader(file))
    }
}
