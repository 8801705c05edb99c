use super::*;
use time::macros::date;

fn sample(date: Date, hour: u8, value: f64) -> ReadingSample {
    ReadingSample {
        at: date
            .with_hms(hour, 0, 0)
            .expect("valid time")
            .assume_utc(),
        value,
    }
}

// =============================================================
// Period boundaries
// =============================================================

#[test]
fn late_december_can_fall_in_week_one_of_next_iso_year() {
    let period = period_of(date!(2024 - 12 - 30), PeriodKind::IsoWeek);
    assert_eq!(period, Period { kind: PeriodKind::IsoWeek, year: 2025, index: 1 });
}

#[test]
fn early_january_can_fall_in_week_53_of_previous_iso_year() {
    let period = period_of(date!(2021 - 01 - 01), PeriodKind::IsoWeek);
    assert_eq!(period, Period { kind: PeriodKind::IsoWeek, year: 2020, index: 53 });
}

#[test]
fn plain_january_first_stays_in_its_own_iso_year() {
    let period = period_of(date!(2026 - 01 - 01), PeriodKind::IsoWeek);
    assert_eq!(period, Period { kind: PeriodKind::IsoWeek, year: 2026, index: 1 });
}

#[test]
fn month_period_uses_calendar_year() {
    let period = period_of(date!(2024 - 12 - 31), PeriodKind::Month);
    assert_eq!(period, Period { kind: PeriodKind::Month, year: 2024, index: 12 });
}

#[test]
fn previous_year_keeps_week_index_when_it_exists() {
    let period = Period { kind: PeriodKind::IsoWeek, year: 2025, index: 10 };
    assert_eq!(period.previous_year().year, 2024);
    assert_eq!(period.previous_year().index, 10);
}

#[test]
fn previous_year_clamps_week_53_to_52() {
    // 2020 had 53 ISO weeks, 2019 only 52.
    let period = Period { kind: PeriodKind::IsoWeek, year: 2020, index: 53 };
    assert_eq!(
        period.previous_year(),
        Period { kind: PeriodKind::IsoWeek, year: 2019, index: 52 }
    );
}

#[test]
fn period_labels_are_compact() {
    assert_eq!(Period { kind: PeriodKind::IsoWeek, year: 2025, index: 7 }.label(), "2025-W07");
    assert_eq!(Period { kind: PeriodKind::Month, year: 2025, index: 3 }.label(), "2025-03");
}

// =============================================================
// Bucketing
// =============================================================

#[test]
fn bucket_consumption_sums_increments_per_week() {
    let samples = vec![
        sample(date!(2025 - 03 - 03), 8, 100.0),
        sample(date!(2025 - 03 - 05), 8, 105.0),
        sample(date!(2025 - 03 - 12), 8, 112.0),
    ];
    let buckets = bucket_consumption(&samples, PeriodKind::IsoWeek);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].period.label(), "2025-W10");
    assert!((buckets[0].consumption - 5.0).abs() < f64::EPSILON);
    assert_eq!(buckets[1].period.label(), "2025-W11");
    assert!((buckets[1].consumption - 7.0).abs() < f64::EPSILON);
}

#[test]
fn bucket_consumption_sorts_unordered_samples() {
    let samples = vec![
        sample(date!(2025 - 03 - 05), 8, 105.0),
        sample(date!(2025 - 03 - 03), 8, 100.0),
    ];
    let buckets = bucket_consumption(&samples, PeriodKind::IsoWeek);
    assert_eq!(buckets.len(), 1);
    assert!((buckets[0].consumption - 5.0).abs() < f64::EPSILON);
}

#[test]
fn bucket_consumption_ignores_meter_resets() {
    let samples = vec![
        sample(date!(2025 - 03 - 03), 6, 100.0),
        sample(date!(2025 - 03 - 03), 12, 105.0),
        sample(date!(2025 - 03 - 04), 6, 3.0),
        sample(date!(2025 - 03 - 04), 12, 10.0),
    ];
    let buckets = bucket_consumption(&samples, PeriodKind::IsoWeek);
    assert_eq!(buckets.len(), 1);
    assert!((buckets[0].consumption - 12.0).abs() < f64::EPSILON);
}

#[test]
fn bucket_consumption_with_too_few_samples_is_empty() {
    assert!(bucket_consumption(&[], PeriodKind::IsoWeek).is_empty());
    let one = vec![sample(date!(2025 - 03 - 03), 8, 100.0)];
    assert!(bucket_consumption(&one, PeriodKind::Month).is_empty());
}

#[test]
fn year_boundary_increment_lands_in_the_later_week() {
    // Dec 29 2024 is still 2024-W52; Dec 30 opens 2025-W01.
    let samples = vec![
        sample(date!(2024 - 12 - 29), 8, 100.0),
        sample(date!(2024 - 12 - 31), 8, 104.0),
    ];
    let buckets = bucket_consumption(&samples, PeriodKind::IsoWeek);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].period.label(), "2025-W01");
    assert!((buckets[0].consumption - 4.0).abs() < f64::EPSILON);
}

// =============================================================
// Year-over-year deltas
// =============================================================

#[test]
fn year_over_year_compares_equivalent_weeks() {
    let samples = vec![
        sample(date!(2024 - 03 - 04), 8, 50.0),
        sample(date!(2024 - 03 - 06), 8, 60.0),
        sample(date!(2025 - 03 - 03), 8, 100.0),
        sample(date!(2025 - 03 - 05), 8, 105.0),
    ];
    let period = Period { kind: PeriodKind::IsoWeek, year: 2025, index: 10 };
    let yoy = year_over_year(&samples, period);
    assert!((yoy.current - 5.0).abs() < f64::EPSILON);
    assert!((yoy.previous - 10.0).abs() < f64::EPSILON);
    assert!((yoy.delta + 5.0).abs() < f64::EPSILON);
    assert!((yoy.pct.expect("pct") + 50.0).abs() < 1e-9);
}

#[test]
fn year_over_year_without_previous_data_has_no_pct() {
    let samples = vec![
        sample(date!(2025 - 03 - 03), 8, 100.0),
        sample(date!(2025 - 03 - 05), 8, 105.0),
    ];
    let period = Period { kind: PeriodKind::IsoWeek, year: 2025, index: 10 };
    let yoy = year_over_year(&samples, period);
    assert!((yoy.current - 5.0).abs() < f64::EPSILON);
    assert!(yoy.previous.abs() < f64::EPSILON);
    assert_eq!(yoy.pct, None);
}
