use super::*;
use time::macros::datetime;

#[test]
fn parses_rfc3339_with_zulu_offset() {
    let parsed = parse_reading_time("2025-03-05T08:30:00Z").expect("parse");
    assert_eq!(parsed, datetime!(2025-03-05 08:30 UTC));
}

#[test]
fn parses_naive_iso8601_as_utc() {
    let parsed = parse_reading_time("2025-03-05T08:30:00").expect("parse");
    assert_eq!(parsed, datetime!(2025-03-05 08:30 UTC));
}

#[test]
fn parses_fractional_seconds() {
    let parsed = parse_reading_time("2025-03-05T08:30:00.250000").expect("parse");
    assert_eq!(parsed.date(), datetime!(2025-03-05 08:30 UTC).date());
}

#[test]
fn rejects_garbage() {
    assert!(parse_reading_time("not a timestamp").is_none());
}

#[test]
fn formats_compact_display_form() {
    assert_eq!(format_reading_time("2025-03-05T08:30:00Z"), "2025-03-05 08:30");
}

#[test]
fn format_falls_back_to_raw_input() {
    assert_eq!(format_reading_time("???"), "???");
}
