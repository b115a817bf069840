//! Errors raised while reading a candidate export.

use thiserror::Error;

/// Errors that can occur while loading or validating a candidate snapshot.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The export file does not exist
    #[error("Candidate file not found: {path}")]
    FileNotFound { path: String },

    /// Reading the export failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record couldn't be parsed.
    ///
    /// For JSON arrays `line` is the line serde_json reported; for JSON
    /// Lines it is the line holding the record.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// The file extension is neither `.json` nor `.jsonl`
    #[error("Unsupported candidate file format: {path}")]
    UnsupportedFormat { path: String },

    /// A numeric field is negative or not finite
    #[error("Invalid value for {field} on candidate {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },

    /// Two records share the same id
    #[error("Duplicate candidate id: {0}")]
    DuplicateId(String),

    /// A row is unusable for another reason
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Result alias used across the loader
pub type Result<T> = std::result::Result<T, DataLoadError>;
