//! Bulk import of entries from delimited text files.

pub mod csv_importer;

pub use csv_importer::{CsvImporter, CsvRow, FIELDS_PER_ROW};
