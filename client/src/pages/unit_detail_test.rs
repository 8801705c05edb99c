use super::*;

fn meter(id: &str, unit_id: &str) -> Meter {
    Meter {
        id: id.to_owned(),
        serial_number: format!("SN-{id}"),
        kind: "water_cold".to_owned(),
        unit_of_measure: "m3".to_owned(),
        unit_id: unit_id.to_owned(),
    }
}

fn reading(id: i64, time: &str, value: f64) -> Reading {
    Reading {
        id,
        value,
        time: time.to_owned(),
        is_manual: false,
        meter_id: "m-1".to_owned(),
    }
}

#[test]
fn meters_for_unit_filters_by_unit_id() {
    let meters = vec![meter("m-1", "u-1"), meter("m-2", "u-2"), meter("m-3", "u-1")];
    let filtered = meters_for_unit(meters, "u-1");
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|m| m.unit_id == "u-1"));
}

#[test]
fn reading_samples_drop_unparseable_timestamps() {
    let readings = vec![
        reading(1, "2025-03-05T08:00:00", 105.0),
        reading(2, "garbage", 999.0),
        reading(3, "2025-03-03T08:00:00Z", 100.0),
    ];
    let samples = reading_samples(&readings);
    assert_eq!(samples.len(), 2);
}

#[test]
fn latest_period_tracks_the_newest_sample() {
    let readings = vec![
        reading(1, "2025-03-12T08:00:00", 112.0),
        reading(2, "2025-03-03T08:00:00", 100.0),
    ];
    let samples = reading_samples(&readings);
    let period = latest_period(&samples, PeriodKind::IsoWeek).expect("period");
    assert_eq!(period.label(), "2025-W11");

    let monthly = latest_period(&samples, PeriodKind::Month).expect("period");
    assert_eq!(monthly.label(), "2025-03");
}

#[test]
fn latest_period_is_none_without_samples() {
    assert_eq!(latest_period(&[], PeriodKind::IsoWeek), None);
}

#[test]
fn delta_line_includes_percentage_when_available() {
    let delta = ConsumptionDelta {
        current: 5.0,
        previous: 10.0,
        delta: -5.0,
        pct: Some(-50.0),
    };
    assert_eq!(delta_line(&delta), "-5.00 (-50.0%)");
}

#[test]
fn delta_line_omits_percentage_without_baseline() {
    let delta = ConsumptionDelta {
        current: 5.0,
        previous: 0.0,
        delta: 5.0,
        pct: None,
    };
    assert_eq!(delta_line(&delta), "+5.00");
}
