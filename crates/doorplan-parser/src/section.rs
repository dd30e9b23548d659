//! Section segmentation.
//!
//! Door sections are delimited by a sentinel row named
//! `"Configuration and Communication Settings"`; the row immediately above
//! each sentinel holds the door's display name. This pass only finds the
//! boundaries; field extraction happens later, per section.

use log::debug;

use crate::row::ReportRow;

/// The sentinel row name marking the start of a door's configuration block.
pub(crate) const SECTION_SENTINEL: &str = "Configuration and Communication Settings";

/// One door's span of the report: the name row plus everything up to the
/// next sentinel.
#[derive(Debug)]
pub(crate) struct Section<'a> {
    door_name: &'a str,
    rows: &'a [ReportRow],
}

impl<'a> Section<'a> {
    pub(crate) fn door_name(&self) -> &'a str {
        self.door_name
    }

    pub(crate) fn rows(&self) -> &'a [ReportRow] {
        self.rows
    }
}

/// Splits the report into an ordered sequence of door sections.
///
/// A sentinel at index 0 has no preceding name row and is skipped; the rest
/// of the report still parses.
pub(crate) fn split_sections(rows: &[ReportRow]) -> Vec<Section<'_>> {
    let mut boundaries: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.name() == SECTION_SENTINEL)
        .map(|(index, _)| index)
        .collect();
    boundaries.push(rows.len());

    let mut sections = Vec::new();
    for window in boundaries.windows(2) {
        let (start, end) = (window[0], window[1]);
        if start == 0 {
            debug!("Section sentinel at the top of the report has no name row, skipping");
            continue;
        }

        sections.push(Section {
            door_name: rows[start - 1].name(),
            rows: &rows[start - 1..end],
        });
    }

    sections
}
