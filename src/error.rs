//! Structured error types shared across the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeqDiffError {
    /// I/O failure (missing file, unwritable output, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or incomplete input before it reaches the aligner
    #[error("invalid input: {0}")]
    Input(String),

    /// Raised only when an aligner is configured to require non-empty
    /// sequences; empty inputs are otherwise aligned normally
    #[error("empty input sequence")]
    EmptyInput,

    /// A sequence exceeded the configured length guard
    #[error("sequence length {len} exceeds the configured limit {limit}")]
    TooLong { len: usize, limit: usize },

    /// CSV export failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeqDiffError>;
