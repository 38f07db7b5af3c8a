//! Delimited-text reader for bulk entry import.
//!
//! The format is deliberately plain: one record per line, `name,phone,email`,
//! no header row and no quoting. Every line is data and fields are taken
//! verbatim. A field containing a comma cannot be represented.

use crate::error::{ImportError, ImportResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of fields every line must carry.
pub const FIELDS_PER_ROW: usize = 3;

const DELIMITER: char = ',';

/// One parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

/// Reads `name,phone,email` rows from a file or any buffered reader.
///
/// Parsing is all-or-nothing: one malformed line rejects the whole source.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvImporter;

impl CsvImporter {
    pub fn new() -> Self {
        Self
    }

    /// Open `path`, read every row and close the file again.
    ///
    /// # Errors
    ///
    /// `ImportError::Unreadable` when the file cannot be opened or read,
    /// `ImportError::MalformedLine` when a line has the wrong field count.
    pub fn read_rows(&self, path: impl AsRef<Path>) -> ImportResult<Vec<CsvRow>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse(BufReader::new(file), path)
    }

    /// Parse rows from an already open reader. `origin` only labels errors.
    pub fn parse<R: BufRead>(&self, reader: R, origin: &Path) -> ImportResult<Vec<CsvRow>> {
        reader
            .lines()
            .enumerate()
            .map(|(index, line)| {
                let line = line.map_err(|source| ImportError::Unreadable {
                    path: origin.to_path_buf(),
                    source,
                })?;
                Self::parse_line(&line, index + 1, origin)
            })
            .collect()
    }

    fn parse_line(line: &str, line_number: usize, origin: &Path) -> ImportResult<CsvRow> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();

        match fields.as_slice() {
            [name, phone_number, email] => Ok(CsvRow {
                name: (*name).to_string(),
                phone_number: (*phone_number).to_string(),
                email: (*email).to_string(),
            }),
            _ => Err(ImportError::MalformedLine {
                path: origin.to_path_buf(),
                line: line_number,
                expected: FIELDS_PER_ROW,
                found: fields.len(),
            }),
        }
    }
}
