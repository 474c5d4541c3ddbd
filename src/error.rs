//! Error types for table construction, access and search

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the cell, row and table model
#[derive(Debug, Error)]
pub enum Error {
    /// A composite value could not be encoded as JSON text
    #[error("Failed to encode value as JSON: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Text flagged as JSON is not a JSON array or object
    #[error("Invalid JSON: {reason}")]
    InvalidJson { reason: String },

    /// Indexed access past the end of a row or table
    #[error("Index {index} out of range (length: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A pushed row disagrees with the width fixed by the first row
    #[error("Expected row length of {expected}, got {actual}.")]
    RowLengthMismatch { expected: usize, actual: usize },

    /// No data row satisfied every search criterion
    #[error(
        "No row with cells at index(es) \"{}\" with value(s) \"{}\".",
        join_indexes(.criteria),
        join_values(.criteria)
    )]
    NoSuchCell { criteria: Vec<(usize, String)> },
}

fn join_indexes(criteria: &[(usize, String)]) -> String {
    criteria
        .iter()
        .map(|(index, _)| index.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_values(criteria: &[(usize, String)]) -> String {
    criteria
        .iter()
        .map(|(_, value)| value.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
