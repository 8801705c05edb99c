//! Timestamp parsing/formatting for meter readings.
//!
//! The backend emits ISO 8601 timestamps, sometimes with an offset and
//! sometimes naive (treated as UTC). Display formatting is deterministic
//! rather than locale-dependent so lists render identically everywhere.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const READING_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Parse a backend reading timestamp.
///
/// Accepts RFC 3339 (`2025-03-05T08:00:00Z`), ISO 8601 with offset, and
/// naive ISO 8601 (`2025-03-05T08:00:00`), which is assumed UTC.
pub fn parse_reading_time(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Iso8601::DEFAULT) {
        return Some(parsed);
    }
    PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Render a reading timestamp as `YYYY-MM-DD HH:MM`.
///
/// Unparseable input is shown verbatim rather than dropped.
#[must_use]
pub fn format_reading_time(raw: &str) -> String {
    parse_reading_time(raw)
        .and_then(|dt| dt.format(&READING_TIME).ok())
        .unwrap_or_else(|| raw.to_owned())
}
