//! Unit detail page: meters, recent readings, and the year-over-year
//! consumption comparison.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend has no per-unit meter listing, so this page pulls the full
//! meter inventory and filters client-side, then loads readings per meter.
//! Consumption math (ISO week/month bucketing, deltas) comes from the
//! `metering` crate.

#[cfg(test)]
#[path = "unit_detail_test.rs"]
mod unit_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use metering::{ConsumptionDelta, Period, PeriodKind, ReadingSample};

use crate::net::types::{Meter, Reading};
use crate::state::auth::{self, AuthState};
use crate::util::format::{format_reading_time, parse_reading_time};

const RECENT_READINGS: usize = 5;

/// A meter joined with its readings, newest first.
#[derive(Clone, Debug, PartialEq)]
pub struct MeterWithReadings {
    pub meter: Meter,
    pub readings: Vec<Reading>,
}

/// Meters installed in one unit.
fn meters_for_unit(meters: Vec<Meter>, unit_id: &str) -> Vec<Meter> {
    meters.into_iter().filter(|m| m.unit_id == unit_id).collect()
}

/// Counter samples for the bucketing math, dropping unparseable timestamps.
fn reading_samples(readings: &[Reading]) -> Vec<ReadingSample> {
    readings
        .iter()
        .filter_map(|r| {
            parse_reading_time(&r.time).map(|at| ReadingSample { at, value: r.value })
        })
        .collect()
}

/// The comparison period: the one holding the newest parseable reading.
fn latest_period(samples: &[ReadingSample], kind: PeriodKind) -> Option<Period> {
    samples
        .iter()
        .max_by_key(|s| s.at)
        .map(|s| metering::period_of(s.at.date(), kind))
}

/// `+4.20 (+12.5%)` style delta line; the percentage is omitted when the
/// previous period consumed nothing.
fn delta_line(delta: &ConsumptionDelta) -> String {
    match delta.pct {
        Some(pct) => format!("{:+.2} ({pct:+.1}%)", delta.delta),
        None => format!("{:+.2}", delta.delta),
    }
}

async fn load_unit_meters(unit_id: &str) -> Vec<MeterWithReadings> {
    let meters = match crate::net::api::fetch_meters().await {
        Ok(list) => list,
        Err(err) => {
            log::error!("failed to fetch meters: {err}");
            return Vec::new();
        }
    };

    let mut loaded = Vec::new();
    for meter in meters_for_unit(meters, unit_id) {
        let readings = match crate::net::api::fetch_meter_readings(&meter.id).await {
            Ok(list) => list,
            Err(err) => {
                log::error!("failed to fetch readings for {}: {err}", meter.serial_number);
                Vec::new()
            }
        };
        loaded.push(MeterWithReadings { meter, readings });
    }
    loaded
}

/// Unit detail page.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn UnitDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    auth::install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let unit_id = move || params.read().get("id").unwrap_or_default();

    let meters = LocalResource::new(move || {
        let id = unit_id();
        async move { load_unit_meters(&id).await }
    });
    let period_kind = RwSignal::new(PeriodKind::IsoWeek);

    let toggle_class = move |kind: PeriodKind| {
        if period_kind.get() == kind {
            "period-toggle__btn period-toggle__btn--active"
        } else {
            "period-toggle__btn"
        }
    };

    view! {
        <main class="unit-page">
            <div class="unit-page__heading">
                <a class="back-link" href="/">"← Back to Dashboard"</a>
                <h1 class="unit-page__title">"Unit Details"</h1>
                <p class="unit-page__id">"ID: " {unit_id}</p>
            </div>

            <section class="unit-page__meters">
                <div class="unit-page__meters-header">
                    <h2>"Meters & Readings"</h2>
                    <div class="period-toggle">
                        <button
                            class=move || toggle_class(PeriodKind::IsoWeek)
                            on:click=move |_| period_kind.set(PeriodKind::IsoWeek)
                        >
                            "Weekly"
                        </button>
                        <button
                            class=move || toggle_class(PeriodKind::Month)
                            on:click=move |_| period_kind.set(PeriodKind::Month)
                        >
                            "Monthly"
                        </button>
                    </div>
                </div>

                <Suspense fallback=move || view! { <p>"Loading meters..."</p> }>
                    {move || {
                        meters.get().map(|list| {
                            if list.is_empty() {
                                view! {
                                    <div class="unit-page__empty">
                                        "No meters installed in this unit."
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="unit-page__meter-cards">
                                        {list
                                            .into_iter()
                                            .map(|entry| view! { <MeterCard entry=entry kind=period_kind/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>
        </main>
    }
}

/// One meter with its recent readings and consumption comparison.
#[component]
fn MeterCard(entry: MeterWithReadings, kind: RwSignal<PeriodKind>) -> impl IntoView {
    let MeterWithReadings { meter, readings } = entry;
    let samples = reading_samples(&readings);
    let uom = meter.unit_of_measure.clone();
    let uom_for_rows = uom.clone();
    let recent: Vec<Reading> = readings.iter().take(RECENT_READINGS).cloned().collect();
    let no_readings = recent.is_empty();

    let comparison = move || {
        let kind = kind.get();
        latest_period(&samples, kind)
            .map(|period| (period, metering::year_over_year(&samples, period)))
    };
    let comparison_uom = uom.clone();

    view! {
        <div class="meter-card">
            <div class="meter-card__header">
                <div>
                    <h3 class="meter-card__kind">{meter.kind.to_uppercase()}</h3>
                    <p class="meter-card__serial">{meter.serial_number.clone()}</p>
                </div>
                <span class="meter-card__uom">{uom.clone()}</span>
            </div>

            <div class="meter-card__readings">
                {recent
                    .iter()
                    .map(|reading| {
                        view! {
                            <div class="meter-card__reading">
                                <span class="meter-card__time">
                                    {format_reading_time(&reading.time)}
                                </span>
                                <span class="meter-card__value">
                                    {format!("{} {}", reading.value, uom_for_rows)}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                {no_readings.then(|| view! { <p class="meter-card__empty">"No readings yet."</p> })}
            </div>

            <div class="meter-card__comparison">
                {move || match comparison() {
                    Some((period, yoy)) => {
                        view! {
                            <div class="comparison">
                                <span class="comparison__current">
                                    {format!("{}: {:.2} {}", period.label(), yoy.current, comparison_uom)}
                                </span>
                                <span class="comparison__previous">
                                    {format!(
                                        "{}: {:.2} {}",
                                        period.previous_year().label(),
                                        yoy.previous,
                                        comparison_uom,
                                    )}
                                </span>
                                <span class="comparison__delta">{delta_line(&yoy)}</span>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <p class="comparison comparison--empty">
                                "Not enough readings to compare."
                            </p>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
