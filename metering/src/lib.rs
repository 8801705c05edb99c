//! Domain logic shared by metering UI surfaces.
//!
//! This crate owns the two pieces of the client that are pure computation:
//! the measurement-declaration grammar attached to a building's telemetry
//! configuration, and the calendar bucketing used to compare consumption
//! between equivalent periods across years. It has no browser dependencies
//! so both halves stay testable on native targets.

pub mod decl;
pub mod periods;

pub use decl::{DeclError, MeasurementDecl, parse_measurements, serialize_measurements};
pub use periods::{
    ConsumptionDelta, Period, PeriodConsumption, PeriodKind, ReadingSample, bucket_consumption,
    consumption_in, period_of, year_over_year,
};
