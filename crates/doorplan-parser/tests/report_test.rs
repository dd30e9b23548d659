//! Integration tests driving the parser with full CSV reports.

use doorplan_core::model::{HardwareKind, SubpanelId};
use doorplan_parser::parse_report;

const UPPER_SCHOOL_REPORT: &str = "\
Name,Value
109.1 Data Room,
Configuration and Communication Settings,
Panel,Upper School
Door Mode,Card Only
Hardware,
Reader,Reader on subpanel 3 Address 7
Door Position,D07 DPOS (Subpanel:3 Input:7)
Strike,Strike on subpanel 3 Address 7
Rex #1,REX on subpanel 3 Address 14
Notes,installer comment
";

#[test]
fn end_to_end_scenario_upper_school() {
    let panels = parse_report(UPPER_SCHOOL_REPORT.as_bytes()).unwrap();

    let panel = panels.get("Upper School").expect("panel parsed");
    let subpanel = panel
        .subpanel(SubpanelId::Addressed(3))
        .expect("door grouped under subpanel 3");
    let door = subpanel.get("109.1 Data Room").expect("door present");

    assert_eq!(door.door_index(), Some(7));

    let reader = door.hardware_point(HardwareKind::Reader).unwrap();
    assert_eq!(reader.kind(), HardwareKind::Reader);
    assert_eq!(reader.subpanel(), Some(3));
    assert_eq!(reader.address(), Some(7));
    assert_eq!(reader.raw_text(), "Reader on subpanel 3 Address 7");

    // Unrecognized field names never become hardware points
    assert_eq!(door.hardware().count(), 4);
}

#[test]
fn every_door_lands_in_exactly_one_bucket() {
    let report = "\
Name,Value
Front Door,
Configuration and Communication Settings,
Panel,Main
Hardware,
Reader,Reader on subpanel 0 Address 1
Back Door,
Configuration and Communication Settings,
Panel,Main
Hardware,
Reader,Reader on subpanel 2 Address 3
Orphan Door,
Configuration and Communication Settings,
Hardware,
Reader,Reader on subpanel 1 Address 1
Mystery Door,
Configuration and Communication Settings,
Panel,Main
Hardware,
Reader,no location in this text
";

    let panels = parse_report(report.as_bytes()).unwrap();
    assert_eq!(panels.len(), 1);

    let main = panels.get("Main").unwrap();

    // Three doors survive (the orphan has no Panel row), one per bucket
    let total: usize = main.subpanels().map(|(_, sp)| sp.len()).sum();
    assert_eq!(total, 3);

    assert!(
        main.subpanel(SubpanelId::Addressed(0))
            .unwrap()
            .get("Front Door")
            .is_some()
    );
    assert!(
        main.subpanel(SubpanelId::Addressed(2))
            .unwrap()
            .get("Back Door")
            .is_some()
    );
    assert!(
        main.subpanel(SubpanelId::Unresolved)
            .unwrap()
            .get("Mystery Door")
            .is_some()
    );
    assert!(main.subpanel(SubpanelId::Addressed(1)).is_none());
}

#[test]
fn empty_report_yields_no_panels() {
    let panels = parse_report("Name,Value\n".as_bytes()).unwrap();
    assert!(panels.is_empty());
}

#[test]
fn duplicate_door_in_same_bucket_keeps_last() {
    let report = "\
Name,Value
Lobby,
Configuration and Communication Settings,
Panel,Main
Hardware,
Reader,Reader on subpanel 1 Address 2
Lobby,
Configuration and Communication Settings,
Panel,Main
Hardware,
Reader,Reader on subpanel 1 Address 6
";

    let panels = parse_report(report.as_bytes()).unwrap();
    let subpanel = panels
        .get("Main")
        .unwrap()
        .subpanel(SubpanelId::Addressed(1))
        .unwrap();

    assert_eq!(subpanel.len(), 1);
    assert_eq!(subpanel.get("Lobby").unwrap().door_index(), Some(6));
}
