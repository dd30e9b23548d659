//! Hierarchy assembly: doors into subpanels into panels.
//!
//! Each section resolves independently; a section missing its `Panel` row
//! is dropped with a debug log and never aborts the rest of the report.

use std::collections::BTreeMap;

use log::debug;

use doorplan_core::model::{Door, HardwareKind, HardwarePoint, PanelSet, SubpanelId};

use crate::extract;
use crate::row::ReportRow;
use crate::section::{Section, split_sections};

/// Row name declaring the owning panel of a door section.
const PANEL_ROW: &str = "Panel";

/// Row name introducing the hardware block of a door section.
const HARDWARE_ROW: &str = "Hardware";

/// Assembles the full panel structure from the report rows.
pub(crate) fn build_panel_set(rows: &[ReportRow]) -> PanelSet {
    let mut panels = PanelSet::default();

    for section in split_sections(rows) {
        let Some(panel_name) = find_panel_name(&section) else {
            debug!(door = section.door_name(); "Section has no panel row, skipping");
            continue;
        };

        let hardware = collect_hardware(&section);
        let (subpanel_id, door_index) = resolve_location(&hardware);
        let door = Door::new(section.door_name(), door_index, hardware);

        panels.insert_door(panel_name, subpanel_id, door);
    }

    panels
}

/// Returns the trimmed panel name declared by the section, if any.
///
/// A `Panel` row with an empty value cell counts as missing.
fn find_panel_name<'a>(section: &Section<'a>) -> Option<&'a str> {
    section
        .rows()
        .iter()
        .find(|row| row.name() == PANEL_ROW)
        .and_then(|row| row.value())
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Collects the recognized hardware points following the `Hardware` row.
///
/// All rows from the first `Hardware` row to the end of the section are
/// candidates; unrecognized field names are ignored, and a later point of
/// the same kind overwrites an earlier one.
fn collect_hardware(section: &Section<'_>) -> BTreeMap<HardwareKind, HardwarePoint> {
    let mut hardware = BTreeMap::new();

    let Some(start) = section
        .rows()
        .iter()
        .position(|row| row.name() == HARDWARE_ROW)
    else {
        return hardware;
    };

    for row in &section.rows()[start + 1..] {
        let Some(kind) = HardwareKind::from_field_name(row.name()) else {
            continue;
        };
        let raw = row.value().unwrap_or_default();
        hardware.insert(kind, extract::extract_point(kind, raw));
    }

    hardware
}

/// Determines the door's owning subpanel and wiring index.
///
/// Hardware kinds are scanned in fixed priority order; the first kind with
/// a present subpanel decides both values. No subpanel anywhere puts the
/// door in the unresolved bucket.
fn resolve_location(
    hardware: &BTreeMap<HardwareKind, HardwarePoint>,
) -> (SubpanelId, Option<u32>) {
    for kind in HardwareKind::RESOLUTION_ORDER {
        if let Some(point) = hardware.get(&kind) {
            if let Some(subpanel) = point.subpanel() {
                return (SubpanelId::Addressed(subpanel), point.address());
            }
        }
    }

    (SubpanelId::Unresolved, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SECTION_SENTINEL;

    fn row(name: &str, value: Option<&str>) -> ReportRow {
        ReportRow::new(name, value)
    }

    fn door_section(door: &str, panel: &str, hardware: &[(&str, &str)]) -> Vec<ReportRow> {
        let mut rows = vec![
            row(door, None),
            row(SECTION_SENTINEL, None),
            row("Panel", Some(panel)),
            row("Hardware", None),
        ];
        for (name, value) in hardware {
            rows.push(row(name, Some(value)));
        }
        rows
    }

    #[test]
    fn test_single_door_resolves_subpanel_and_index() {
        let rows = door_section(
            "109.1 Data Room",
            "Upper School",
            &[("Reader", "Reader on subpanel 3 Address 7")],
        );

        let panels = build_panel_set(&rows);
        let panel = panels.get("Upper School").unwrap();
        let door = panel
            .subpanel(SubpanelId::Addressed(3))
            .unwrap()
            .get("109.1 Data Room")
            .unwrap();

        assert_eq!(door.door_index(), Some(7));
        let reader = door.hardware_point(HardwareKind::Reader).unwrap();
        assert_eq!(reader.subpanel(), Some(3));
        assert_eq!(reader.address(), Some(7));
    }

    #[test]
    fn test_resolution_prefers_reader_over_later_kinds() {
        let rows = door_section(
            "Lab",
            "Science Wing",
            &[
                ("Strike", "Strike on subpanel 5 Address 9"),
                ("Reader", "Reader on subpanel 2 Address 1"),
            ],
        );

        let panels = build_panel_set(&rows);
        let panel = panels.get("Science Wing").unwrap();
        assert!(panel.subpanel(SubpanelId::Addressed(2)).is_some());
        assert!(panel.subpanel(SubpanelId::Addressed(5)).is_none());
    }

    #[test]
    fn test_alternate_reader_never_resolves_location() {
        let rows = door_section(
            "Annex",
            "East",
            &[("Alternate Reader", "Reader on subpanel 4 Address 2")],
        );

        let panels = build_panel_set(&rows);
        let panel = panels.get("East").unwrap();
        let subpanel = panel.subpanel(SubpanelId::Unresolved).unwrap();
        let door = subpanel.get("Annex").unwrap();

        assert_eq!(door.door_index(), None);
        // The point itself is still parsed and kept
        let alt = door.hardware_point(HardwareKind::AlternateReader).unwrap();
        assert_eq!(alt.subpanel(), Some(4));
    }

    #[test]
    fn test_subpanel_without_address_gives_unknown_index() {
        let rows = door_section("Gym", "West", &[("Reader", "Reader on Subpanel:6 Input:x")]);

        let panels = build_panel_set(&rows);
        let panel = panels.get("West").unwrap();
        // "Input:x" fails the fallback pattern's numeric capture entirely,
        // so the raw text matches neither pattern
        assert!(panel.subpanel(SubpanelId::Unresolved).is_some());
    }

    #[test]
    fn test_section_without_panel_row_is_dropped() {
        let mut rows = vec![
            row("Orphan Door", None),
            row(SECTION_SENTINEL, None),
            row("Hardware", None),
            row("Reader", Some("Reader on subpanel 1 Address 1")),
        ];
        rows.extend(door_section(
            "Kept Door",
            "Main",
            &[("Reader", "Reader on subpanel 0 Address 2")],
        ));

        let panels = build_panel_set(&rows);
        assert_eq!(panels.len(), 1);
        let panel = panels.get("Main").unwrap();
        assert!(
            panel
                .subpanel(SubpanelId::Addressed(0))
                .unwrap()
                .get("Kept Door")
                .is_some()
        );
    }

    #[test]
    fn test_rows_before_hardware_are_not_candidates() {
        let rows = vec![
            row("Entry", None),
            row(SECTION_SENTINEL, None),
            row("Panel", Some("Main")),
            // A recognized field name before the Hardware row is ignored
            row("Reader", Some("Reader on subpanel 9 Address 9")),
            row("Hardware", None),
            row("Strike", Some("Strike on subpanel 1 Address 3")),
        ];

        let panels = build_panel_set(&rows);
        let panel = panels.get("Main").unwrap();
        assert!(panel.subpanel(SubpanelId::Addressed(9)).is_none());

        let door = panel
            .subpanel(SubpanelId::Addressed(1))
            .unwrap()
            .get("Entry")
            .unwrap();
        assert!(door.hardware_point(HardwareKind::Reader).is_none());
        assert_eq!(door.door_index(), Some(3));
    }

    #[test]
    fn test_later_hardware_row_overwrites_earlier_same_kind() {
        let rows = door_section(
            "Dock",
            "Warehouse",
            &[
                ("Reader", "Reader on subpanel 1 Address 1"),
                ("Reader", "Reader on subpanel 2 Address 8"),
            ],
        );

        let panels = build_panel_set(&rows);
        let panel = panels.get("Warehouse").unwrap();
        let door = panel
            .subpanel(SubpanelId::Addressed(2))
            .unwrap()
            .get("Dock")
            .unwrap();
        assert_eq!(door.door_index(), Some(8));
    }

    #[test]
    fn test_panel_row_with_empty_value_is_missing() {
        let rows = vec![
            row("Door A", None),
            row(SECTION_SENTINEL, None),
            row("Panel", Some("   ")),
            row("Hardware", None),
        ];

        let panels = build_panel_set(&rows);
        assert!(panels.is_empty());
    }

    #[test]
    fn test_panel_name_is_trimmed() {
        let rows = door_section("Door A", "  Upper School  ", &[]);
        let panels = build_panel_set(&rows);
        assert!(panels.get("Upper School").is_some());
    }
}
