//! Error types for the CSV codec

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while building, writing or converting tables
///
/// Malformed quoting is deliberately absent: the parser never fails on it and
/// an unterminated quote simply runs to the end of the input.
#[derive(Error, Debug)]
pub enum CsvError {
    /// No usable record remained after blank lines were dropped
    #[error("Nothing to parse: input has no non-blank lines")]
    EmptyInput,

    /// Delimiter is not exactly one usable character
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Failed to read input
    #[error("Read error: {0}")]
    ReadError(String),

    /// Failed to write output
    #[error("Write error: {0}")]
    WriteError(String),

    /// JSON text could not be parsed or produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON value has a shape that cannot be laid out as a table
    #[error("Unsupported JSON shape: {0}")]
    UnsupportedJson(String),
}
