//! Error types for csvline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing or configuring a reader
///
/// Reading itself never fails: a line always tokenizes to something, and
/// stream exhaustion is reported through [`ReadStatus`](crate::ReadStatus).
#[derive(Error, Debug)]
pub enum CsvLineError {
    /// Delimiter set was empty
    #[error("Delimiter set must contain at least one character")]
    EmptyDelimiters,

    /// Failed to open an input file
    #[error("Failed to open '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for csvline operations
pub type Result<T> = std::result::Result<T, CsvLineError>;
