//! Parser for access-control "Door Configuration Report" exports.
//!
//! The input is a flat CSV with two named columns, `Name` and `Value`,
//! holding a concatenation of per-door sections. Parsing happens in three
//! passes:
//!
//! 1. [`section`] locates section boundaries and returns an ordered
//!    sequence of immutable section records.
//! 2. [`extract`] recovers `(subpanel, address)` from the semi-free-text
//!    hardware values via an ordered pattern list.
//! 3. [`hierarchy`] resolves each door's owning panel and subpanel and
//!    builds the [`PanelSet`].
//!
//! Structural irregularities never abort the parse: a malformed section is
//! skipped, an unmatched hardware value degrades to absent location data,
//! and the door lands in the unresolved bucket. Only I/O-level failures
//! propagate.

mod error;
mod extract;
mod hierarchy;
mod row;
mod section;

pub use error::ParseError;
pub use row::ReportRow;

use std::io::Read;

use log::{debug, info};

use doorplan_core::model::PanelSet;

/// Parses a door configuration report into a [`PanelSet`].
///
/// Rows that fail to deserialize are skipped with a debug log; only
/// underlying I/O failures surface as errors.
///
/// # Errors
///
/// Returns [`ParseError`] when the CSV source cannot be read.
pub fn parse_report<R: Read>(reader: R) -> Result<PanelSet, ParseError> {
    let rows = read_rows(reader)?;
    info!(rows = rows.len(); "Read report rows");

    let panels = hierarchy::build_panel_set(&rows);
    info!(panels = panels.len(); "Assembled panel structure");

    Ok(panels)
}

fn read_rows<R: Read>(reader: R) -> Result<Vec<ReportRow>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<ReportRow>() {
        match record {
            Ok(row) => rows.push(row),
            Err(err) if err.is_io_error() => return Err(ParseError::Csv(err)),
            Err(err) => debug!(err:?; "Skipping malformed report row"),
        }
    }

    Ok(rows)
}
