use super::*;

#[test]
fn sync_summary_reports_all_counters() {
    let report = UnitSyncReport {
        message: "Sync complete".to_owned(),
        units_created: 2,
        meters_connected: 5,
        units_found: 4,
        units_fetched: true,
    };
    assert_eq!(
        sync_summary(&report),
        "Sync complete: 4 units found, 2 created, 5 meters connected"
    );
}
