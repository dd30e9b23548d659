//! Deterministic layout of one panel's hierarchy into the unit square.
//!
//! The panel box sits at a fixed position at the top; subpanels split the
//! horizontal extent into equal columns below it; each subpanel's doors
//! stack top-down inside a fixed vertical band. All positions are closed
//! form, so the same input always produces bit-identical coordinates.
//!
//! Coordinates live in `[0, 1] × [0, 1]` with y pointing up. Exporters
//! scale into pixel space using the layout's [`canvas hint`](PanelLayout::canvas_size).

use log::warn;

use doorplan_core::draw::{BoxRole, PlacedBox, Segment};
use doorplan_core::geometry::{Point, Size};
use doorplan_core::model::{Door, HardwareKind, Panel};

// Panel box: fixed at the top, centered horizontally.
const PANEL_Y: f32 = 0.95;
const PANEL_WIDTH: f32 = 0.4;
const PANEL_HEIGHT: f32 = 0.08;

// Subpanel band below the panel. Each subpanel takes 80% of its column.
const SUBPANEL_Y: f32 = 0.75;
const SUBPANEL_HEIGHT: f32 = 0.1;
const SUBPANEL_WIDTH_RATIO: f32 = 0.8;

// Vertical band holding the door stacks. Each door gets an equal slot of
// the band; 80% of the slot is box, 20% is spacing, so boxes never touch.
const DOOR_BAND_TOP: f32 = 0.6;
const DOOR_BAND_BOTTOM: f32 = 0.1;
const DOOR_FILL_RATIO: f32 = 0.8;
const DOOR_WIDTH_RATIO: f32 = 0.9;

/// Sort key standing in for an unknown door index, placing those doors last.
const UNKNOWN_INDEX_SORT_KEY: u32 = u32::MAX;

/// The fully resolved placement of one panel diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    boxes: Vec<PlacedBox>,
    connectors: Vec<Segment>,
    subpanel_count: usize,
    max_doors: usize,
}

impl PanelLayout {
    /// All placed boxes: the panel first, then each subpanel followed by its doors.
    pub fn boxes(&self) -> &[PlacedBox] {
        &self.boxes
    }

    /// Connector segments; empty unless lines were requested.
    pub fn connectors(&self) -> &[Segment] {
        &self.connectors
    }

    /// Canvas proportions for this layout, in abstract units.
    ///
    /// Grows with the subpanel count and the fullest door stack so that
    /// boxes keep a readable size: `max(12, 3n) × max(6, 2 + 1.5m)`.
    pub fn canvas_size(&self) -> Size {
        let width = (3.0 * self.subpanel_count as f32).max(12.0);
        let height = (2.0 + 1.5 * self.max_doors as f32).max(6.0);
        Size::new(width, height)
    }
}

/// Layout engine for panel diagrams.
///
/// Options are set builder-style; [`layout_panel`](Self::layout_panel) is
/// pure and reusable across panels.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine {
    show_lines: bool,
}

impl LayoutEngine {
    /// Creates a new layout engine with connector lines disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables connector line segments (builder style).
    pub fn with_connectors(mut self, show_lines: bool) -> Self {
        self.show_lines = show_lines;
        self
    }

    /// Computes the placement for one panel.
    ///
    /// Returns `None` for a panel with zero subpanels: such a panel
    /// produces no artifact at all, not an empty diagram.
    pub fn layout_panel(&self, panel: &Panel) -> Option<PanelLayout> {
        let n = panel.subpanel_count();
        if n == 0 {
            return None;
        }

        let mut boxes = vec![PlacedBox::new(
            BoxRole::Panel,
            Point::new(0.5, PANEL_Y),
            Size::new(PANEL_WIDTH, PANEL_HEIGHT),
            format!("Panel\n{}", panel.name()),
        )];
        let mut connectors = Vec::new();

        for (i, (id, subpanel)) in panel.subpanels().enumerate() {
            let column_width = 1.0 / n as f32;
            let center_x = (i as f32 + 0.5) * column_width;
            let width = column_width * SUBPANEL_WIDTH_RATIO;

            if self.show_lines {
                connectors.push(Segment::new(
                    Point::new(center_x, PANEL_Y - PANEL_HEIGHT / 2.0),
                    Point::new(center_x, SUBPANEL_Y + SUBPANEL_HEIGHT / 2.0),
                ));
            }

            boxes.push(PlacedBox::new(
                BoxRole::Subpanel,
                Point::new(center_x, SUBPANEL_Y),
                Size::new(width, SUBPANEL_HEIGHT),
                format!("Subpanel {id}\n{}", id.kind_label()),
            ));

            let m = subpanel.len();
            if m == 0 {
                continue;
            }

            let slot = (DOOR_BAND_TOP - DOOR_BAND_BOTTOM) / m as f32;
            let box_height = slot * DOOR_FILL_RATIO;

            let mut doors: Vec<&Door> = subpanel.doors().collect();
            // Stable sort keeps report order among doors with unknown indices
            doors.sort_by_key(|door| door.door_index().unwrap_or(UNKNOWN_INDEX_SORT_KEY));

            let mut y = DOOR_BAND_TOP - box_height / 2.0;
            for door in doors {
                if self.show_lines {
                    connectors.push(Segment::new(
                        Point::new(center_x, SUBPANEL_Y - SUBPANEL_HEIGHT / 2.0),
                        Point::new(center_x, y + box_height / 2.0),
                    ));
                }

                boxes.push(PlacedBox::new(
                    BoxRole::Door,
                    Point::new(center_x, y),
                    Size::new(width * DOOR_WIDTH_RATIO, box_height),
                    door_label(door),
                ));

                y -= slot;
            }
        }

        Some(PanelLayout {
            boxes,
            connectors,
            subpanel_count: n,
            max_doors: panel.max_doors(),
        })
    }
}

/// Composes the multi-line label shown inside a door box.
///
/// The door name always leads; the address line appears only for a known,
/// positive index; hardware lines follow in fixed kind order. An address
/// of exactly zero is suppressed from labels by report convention, but it
/// is flagged in the log since zero-based wiring would be invisible here.
fn door_label(door: &Door) -> String {
    let mut lines = vec![door.name().to_string()];

    match door.door_index() {
        Some(index) if index > 0 => lines.push(format!("Addr: {index}")),
        Some(0) => {
            warn!(door = door.name(); "Door index 0 treated as absent for the address label");
        }
        _ => {}
    }

    for kind in HardwareKind::RESOLUTION_ORDER {
        let Some(point) = door.hardware_point(kind) else {
            continue;
        };
        match point.address() {
            Some(address) if address > 0 => {
                if let Some(short) = kind.short_label() {
                    lines.push(format!("{short}:{address}"));
                }
            }
            Some(0) => {
                warn!(
                    door = door.name(),
                    kind = kind.field_name();
                    "Hardware address 0 treated as absent for labels"
                );
            }
            _ => {}
        }
    }

    lines.join("\n")
}
