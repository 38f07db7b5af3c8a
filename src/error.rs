//! Error types for AddressBloc.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::EntryId;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by [`ContactStore`](crate::store::ContactStore) mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The entry is not (or no longer) held by the store
    #[error("Entry not found: {0}")]
    NotFound(EntryId),
}

/// Errors raised while importing a delimited source.
///
/// Every variant means the source was invalid as a whole; nothing from it
/// reaches the store.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The source does not exist or could not be read
    #[error("Cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line did not split into exactly the expected number of fields
    #[error("Malformed line {line} in {}: expected {expected} fields, found {found}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl ImportError {
    /// The source that failed to import.
    pub fn path(&self) -> &Path {
        match self {
            Self::Unreadable { path, .. } | Self::MalformedLine { path, .. } => path,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by the interactive menu.
#[derive(Error, Debug)]
pub enum MenuError {
    /// Reading from or writing to the terminal streams failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with MenuError
pub type MenuResult<T> = Result<T, MenuError>;
