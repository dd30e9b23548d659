//! Field extraction from semi-free-text hardware values.
//!
//! The report encodes a hardware point's location inside prose, e.g.
//! `"Reader on subpanel 3 Address 7"` or `"D02 DPOS (Subpanel:2 Input:5)"`.
//! An ordered list of patterns is tried in turn; the first match wins. Text
//! matching no pattern degrades to absent values, so this stage never fails.

use std::sync::LazyLock;

use regex::Regex;

use doorplan_core::model::{HardwareKind, HardwarePoint};

/// Location patterns in priority order. Each pattern captures the subpanel
/// number in group 1 and the address in group 2; new export formats add an
/// entry here rather than new control flow.
static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "... subpanel 3 Address 12 ..."
        r"(?i)subpanel\s+(\d+)\s+Address\s+(\d+)",
        // "... Subpanel:2 Input:5 ..." (label token varies)
        r"(?i)Subpanel:(\d+)\s+\w+:?(\d+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("location pattern must compile"))
    .collect()
});

/// Recovers `(subpanel, address)` from a raw hardware value.
///
/// Each captured number parses independently; a value too large for `u32`
/// is treated as absent without discarding the other capture.
pub(crate) fn extract_location(raw: &str) -> (Option<u32>, Option<u32>) {
    for pattern in LOCATION_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(raw) {
            let subpanel = captures.get(1).and_then(|m| m.as_str().parse().ok());
            let address = captures.get(2).and_then(|m| m.as_str().parse().ok());
            return (subpanel, address);
        }
    }

    (None, None)
}

/// Builds a [`HardwarePoint`] from a recognized field, preserving the raw
/// text unmodified.
pub(crate) fn extract_point(kind: HardwareKind, raw: &str) -> HardwarePoint {
    let (subpanel, address) = extract_location(raw);
    HardwarePoint::new(kind, subpanel, address, raw)
}
