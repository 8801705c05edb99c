//! Calendar bucketing of cumulative meter readings.
//!
//! DESIGN
//! ======
//! Readings are cumulative counter samples. Consumption inside a period is
//! the sum of successive counter increments that land in it, which makes
//! the math insensitive to sampling cadence. Periods are ISO 8601 weeks or
//! calendar months so "the same week last year" is well defined at year
//! boundaries.

#[cfg(test)]
#[path = "periods_test.rs"]
mod periods_test;

use std::collections::BTreeMap;

use time::{Date, OffsetDateTime};

/// Granularity of a comparison period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodKind {
    /// ISO 8601 week (week-based year + week number).
    IsoWeek,
    /// Calendar month.
    Month,
}

/// One concrete period of a given kind.
///
/// For [`PeriodKind::IsoWeek`], `year` is the ISO week-based year and
/// `index` the week number (1..=53). For [`PeriodKind::Month`], `year`
/// is the calendar year and `index` the month (1..=12).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Period {
    pub kind: PeriodKind,
    pub year: i32,
    pub index: u8,
}

impl Period {
    /// The equivalent period one year earlier.
    ///
    /// ISO week 53 clamps to week 52 when the preceding ISO year has
    /// only 52 weeks.
    #[must_use]
    pub fn previous_year(self) -> Self {
        let year = self.year - 1;
        let index = match self.kind {
            PeriodKind::IsoWeek => self.index.min(time::util::weeks_in_year(year)),
            PeriodKind::Month => self.index,
        };
        Self { kind: self.kind, year, index }
    }

    /// Short display label, `2025-W07` or `2025-03`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.kind {
            PeriodKind::IsoWeek => format!("{}-W{:02}", self.year, self.index),
            PeriodKind::Month => format!("{}-{:02}", self.year, self.index),
        }
    }
}

/// One cumulative counter sample from a meter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadingSample {
    /// Sample timestamp.
    pub at: OffsetDateTime,
    /// Counter value at that instant.
    pub value: f64,
}

/// Consumption attributed to one period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodConsumption {
    pub period: Period,
    pub consumption: f64,
}

/// Year-over-year comparison for one period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsumptionDelta {
    /// Consumption in the requested period.
    pub current: f64,
    /// Consumption in the previous-year equivalent period.
    pub previous: f64,
    /// `current - previous`.
    pub delta: f64,
    /// Percentage change relative to `previous`; `None` when the
    /// previous period consumed nothing.
    pub pct: Option<f64>,
}

/// The period a calendar date falls in.
#[must_use]
pub fn period_of(date: Date, kind: PeriodKind) -> Period {
    match kind {
        PeriodKind::IsoWeek => {
            let (year, week, _) = date.to_iso_week_date();
            Period { kind, year, index: week }
        }
        PeriodKind::Month => Period {
            kind,
            year: date.year(),
            index: u8::from(date.month()),
        },
    }
}

/// Bucket counter samples into per-period consumption, oldest first.
///
/// Each successive counter increment is attributed to the period of the
/// later sample. A negative step means the meter was reset or replaced
/// and contributes nothing. Fewer than two samples yield no buckets.
#[must_use]
pub fn bucket_consumption(samples: &[ReadingSample], kind: PeriodKind) -> Vec<PeriodConsumption> {
    let mut ordered: Vec<ReadingSample> = samples.to_vec();
    ordered.sort_by_key(|s| s.at);

    let mut buckets: BTreeMap<(i32, u8), f64> = BTreeMap::new();
    for pair in ordered.windows(2) {
        let step = pair[1].value - pair[0].value;
        if step < 0.0 {
            continue;
        }
        let period = period_of(pair[1].at.date(), kind);
        *buckets.entry((period.year, period.index)).or_insert(0.0) += step;
    }

    buckets
        .into_iter()
        .map(|((year, index), consumption)| PeriodConsumption {
            period: Period { kind, year, index },
            consumption,
        })
        .collect()
}

/// Consumption attributed to exactly `period`, zero when no increments landed in it.
#[must_use]
pub fn consumption_in(samples: &[ReadingSample], period: Period) -> f64 {
    bucket_consumption(samples, period.kind)
        .into_iter()
        .find(|pc| pc.period == period)
        .map_or(0.0, |pc| pc.consumption)
}

/// Compare consumption in `period` against its previous-year equivalent.
#[must_use]
pub fn year_over_year(samples: &[ReadingSample], period: Period) -> ConsumptionDelta {
    let current = consumption_in(samples, period);
    let previous = consumption_in(samples, period.previous_year());
    let delta = current - previous;
    let pct = if previous > 0.0 {
        Some(delta / previous * 100.0)
    } else {
        None
    };
    ConsumptionDelta { current, previous, delta, pct }
}
