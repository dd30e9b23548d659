//! The panel / subpanel / door hierarchy.
//!
//! A report parses into a [`PanelSet`]: panels keyed by name, each panel
//! holding subpanels keyed by [`SubpanelId`], each subpanel holding doors
//! keyed by display name. Every door belongs to exactly one
//! `(panel, subpanel)` bucket. All records are immutable once built; the
//! parser assembles them and everything downstream only reads.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use log::debug;

/// The six recognized hardware fields of a door section.
///
/// Any other field name inside a hardware block is ignored by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HardwareKind {
    Reader,
    AlternateReader,
    DoorPosition,
    Strike,
    Rex1,
    Rex2,
}

impl HardwareKind {
    /// Priority order used both to resolve a door's owning subpanel and to
    /// emit hardware label lines. `AlternateReader` is parsed but takes no
    /// part in resolution or labels.
    pub const RESOLUTION_ORDER: [HardwareKind; 5] = [
        HardwareKind::Reader,
        HardwareKind::DoorPosition,
        HardwareKind::Strike,
        HardwareKind::Rex1,
        HardwareKind::Rex2,
    ];

    /// Maps an exact report field name to a hardware kind.
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "Reader" => Some(Self::Reader),
            "Alternate Reader" => Some(Self::AlternateReader),
            "Door Position" => Some(Self::DoorPosition),
            "Strike" => Some(Self::Strike),
            "Rex #1" => Some(Self::Rex1),
            "Rex #2" => Some(Self::Rex2),
            _ => None,
        }
    }

    /// Returns the field name as it appears in the report.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Reader => "Reader",
            Self::AlternateReader => "Alternate Reader",
            Self::DoorPosition => "Door Position",
            Self::Strike => "Strike",
            Self::Rex1 => "Rex #1",
            Self::Rex2 => "Rex #2",
        }
    }

    /// Returns the abbreviated label used inside door boxes, or `None` for
    /// kinds that never appear on a label.
    pub fn short_label(self) -> Option<&'static str> {
        match self {
            Self::Reader => Some("RDR Output"),
            Self::AlternateReader => None,
            Self::DoorPosition => Some("DPOS"),
            Self::Strike => Some("LOCK Output"),
            Self::Rex1 => Some("REX1 Input"),
            Self::Rex2 => Some("REX2 Input"),
        }
    }
}

/// One typed hardware field extracted from a door's configuration block.
///
/// `subpanel` and `address` are absent when the raw text matched neither
/// recognized pattern; `raw_text` always preserves the original value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwarePoint {
    kind: HardwareKind,
    subpanel: Option<u32>,
    address: Option<u32>,
    raw_text: String,
}

impl HardwarePoint {
    pub fn new(
        kind: HardwareKind,
        subpanel: Option<u32>,
        address: Option<u32>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            subpanel,
            address,
            raw_text: raw_text.into(),
        }
    }

    pub fn kind(&self) -> HardwareKind {
        self.kind
    }

    pub fn subpanel(&self) -> Option<u32> {
        self.subpanel
    }

    pub fn address(&self) -> Option<u32> {
        self.address
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// One access point with up to six hardware fields.
///
/// `door_index` is the wiring address resolved from the hardware block;
/// `None` means the index could not be determined. The `-1` sentinel of the
/// source report format exists only at the rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Door {
    name: String,
    door_index: Option<u32>,
    hardware: BTreeMap<HardwareKind, HardwarePoint>,
}

impl Door {
    pub fn new(
        name: impl Into<String>,
        door_index: Option<u32>,
        hardware: BTreeMap<HardwareKind, HardwarePoint>,
    ) -> Self {
        Self {
            name: name.into(),
            door_index,
            hardware,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn door_index(&self) -> Option<u32> {
        self.door_index
    }

    /// Returns the hardware point of the given kind, if the report declared one.
    pub fn hardware_point(&self, kind: HardwareKind) -> Option<&HardwarePoint> {
        self.hardware.get(&kind)
    }

    pub fn hardware(&self) -> impl Iterator<Item = &HardwarePoint> {
        self.hardware.values()
    }
}

/// Identifies a subpanel within a panel.
///
/// `Addressed(0)` is the main panel's internal I/O; any other addressed id
/// is an add-on expansion unit. `Unresolved` is the bucket for doors whose
/// hardware yielded no subpanel number.
///
/// The derived `Ord` uses declaration order, so `Unresolved` sorts before
/// every addressed id. This matches the source report convention where the
/// unresolved bucket carries id `-1` and a plain ascending sort places it
/// leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubpanelId {
    Unresolved,
    Addressed(u32),
}

impl SubpanelId {
    /// Returns the human-readable kind line for this subpanel's box label.
    pub fn kind_label(self) -> &'static str {
        match self {
            Self::Addressed(0) => "Internal SIO",
            _ => "MR52",
        }
    }
}

impl fmt::Display for SubpanelId {
    /// Formats the id as the report's integer convention: `-1` for the
    /// unresolved bucket. This is the only place the sentinel surfaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved => write!(f, "-1"),
            Self::Addressed(id) => write!(f, "{id}"),
        }
    }
}

/// An expansion unit (or the panel's internal I/O) owning a set of doors.
///
/// Doors are keyed by display name; insertion order is preserved so that
/// downstream tie-breaking among unresolved door indices stays stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subpanel {
    doors: IndexMap<String, Door>,
}

impl Subpanel {
    /// Inserts a door, replacing any earlier door with the same name.
    ///
    /// Last write wins, consistent with a single linear scan of the report.
    pub fn insert_door(&mut self, door: Door) {
        if let Some(previous) = self.doors.insert(door.name().to_string(), door) {
            debug!(door = previous.name(); "Replacing earlier door with the same name");
        }
    }

    pub fn doors(&self) -> impl Iterator<Item = &Door> {
        self.doors.values()
    }

    pub fn get(&self, name: &str) -> Option<&Door> {
        self.doors.get(name)
    }

    pub fn len(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }
}

/// The main access-control controller, the root of one diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    name: String,
    subpanels: BTreeMap<SubpanelId, Subpanel>,
}

impl Panel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subpanels: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates subpanels in deterministic order: unresolved first, then
    /// ascending by id.
    pub fn subpanels(&self) -> impl Iterator<Item = (SubpanelId, &Subpanel)> {
        self.subpanels.iter().map(|(id, sp)| (*id, sp))
    }

    pub fn subpanel(&self, id: SubpanelId) -> Option<&Subpanel> {
        self.subpanels.get(&id)
    }

    /// Returns the subpanel bucket for `id`, creating it if absent.
    pub fn subpanel_mut(&mut self, id: SubpanelId) -> &mut Subpanel {
        self.subpanels.entry(id).or_default()
    }

    pub fn subpanel_count(&self) -> usize {
        self.subpanels.len()
    }

    /// Returns the door count of the fullest subpanel, or zero for an empty panel.
    pub fn max_doors(&self) -> usize {
        self.subpanels
            .values()
            .map(Subpanel::len)
            .max()
            .unwrap_or(0)
    }
}

/// The root structure: panels keyed by name, in report order.
///
/// Built once per input file and read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelSet {
    panels: IndexMap<String, Panel>,
}

impl PanelSet {
    /// Inserts a door into `panel_name` / `subpanel_id`, creating the panel
    /// and subpanel buckets as needed. The door ends up in exactly one bucket.
    pub fn insert_door(&mut self, panel_name: &str, subpanel_id: SubpanelId, door: Door) {
        self.panels
            .entry(panel_name.to_string())
            .or_insert_with(|| Panel::new(panel_name))
            .subpanel_mut(subpanel_id)
            .insert_door(door);
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    pub fn get(&self, name: &str) -> Option<&Panel> {
        self.panels.get(name)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
