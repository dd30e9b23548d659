//! Error adapter for converting DoorplanError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Report parsing
//! degrades structural irregularities to sentinel values rather than spanned
//! diagnostics, so every error renders as a single reportable.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use doorplan::DoorplanError;

/// Adapter wrapping a [`DoorplanError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a DoorplanError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DoorplanError::Io(_) => "doorplan::io",
            DoorplanError::Parse(_) => "doorplan::parse",
            DoorplanError::Export(_) => "doorplan::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`DoorplanError`] into a list of reportable errors.
pub fn to_reportables(err: &DoorplanError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}
