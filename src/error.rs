//! Error types for the floor-plan source and the invocation surface.

use std::path::PathBuf;

use thiserror::Error;

/// Problems with a floor-plan source.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("Input matrix has no rows")]
    Empty,

    #[error("Input file can only contain 0s and 1s (row {row}, column {column}: {value:?})")]
    InvalidCell {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Input file matrix should have equal columns on each row (row {row} has {found}, expected {expected})")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// User-facing failures of a single solve request.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("File name given is empty")]
    EmptyName,

    #[error("File {0} doesn't exist")]
    MissingInput(PathBuf),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
