//! Error types for report parsing.
//!
//! Per the parser's best-effort policy, only whole-file failures become
//! errors; structural irregularities inside the report are absorbed at the
//! lowest level with sentinel/absent values.

use std::io;

use thiserror::Error;

/// Errors surfaced while reading a report source.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
