//! Error types for Doorplan operations.
//!
//! This module provides the main error type [`DoorplanError`] which wraps
//! the error conditions that can occur while turning a report into
//! diagrams. Per the parsing policy, structural irregularities inside the
//! report never reach this type; only whole-file and I/O failures do.

use std::io;

use thiserror::Error;

use doorplan_parser::ParseError;

/// The main error type for Doorplan operations.
#[derive(Debug, Error)]
pub enum DoorplanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Report error: {0}")]
    Parse(#[from] ParseError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::ExportError> for DoorplanError {
    fn from(error: crate::export::ExportError) -> Self {
        Self::Export(Box::new(error))
    }
}
