//! Building detail page: unit list plus admin-only building actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admins can synchronize units/meters from the building's telemetry
//! store and assign a manager ("Home Lord"); everyone else just browses
//! the unit list.

#[cfg(test)]
#[path = "building_detail_test.rs"]
mod building_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::user_select::UserSelect;
use crate::net::types::UnitSyncReport;
use crate::state::auth::{self, AuthState};

/// One-line summary of a completed unit sync.
fn sync_summary(report: &UnitSyncReport) -> String {
    format!(
        "{}: {} units found, {} created, {} meters connected",
        report.message, report.units_found, report.units_created, report.meters_connected
    )
}

/// Building detail page.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn BuildingDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    auth::install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let building_id = move || params.read().get("id").unwrap_or_default();

    let building = LocalResource::new(move || {
        let id = building_id();
        async move {
            match crate::net::api::fetch_building(&id).await {
                Ok(b) => Some(b),
                Err(err) => {
                    log::error!("failed to fetch building {id}: {err}");
                    None
                }
            }
        }
    });
    let units = LocalResource::new(move || {
        let id = building_id();
        async move {
            match crate::net::api::fetch_building_units(&id).await {
                Ok(list) => list,
                Err(err) => {
                    log::error!("failed to fetch units for {id}: {err}");
                    Vec::new()
                }
            }
        }
    });

    let is_admin = move || auth.get().is_admin();
    let sync_report = RwSignal::new(None::<UnitSyncReport>);
    let action_error = RwSignal::new(String::new());
    let syncing = RwSignal::new(false);
    let manager_choice = RwSignal::new(String::new());

    let on_sync = move |_| {
        if syncing.get() {
            return;
        }
        syncing.set(true);
        action_error.set(String::new());
        let id = building_id();
        leptos::task::spawn_local(async move {
            match crate::net::api::sync_building_units(&id).await {
                Ok(report) => {
                    sync_report.set(Some(report));
                    building.refetch();
                    units.refetch();
                }
                Err(e) => action_error.set(e),
            }
            syncing.set(false);
        });
    };

    let on_assign = move |_| {
        let manager_id = manager_choice.get();
        if manager_id.is_empty() {
            return;
        }
        action_error.set(String::new());
        let id = building_id();
        leptos::task::spawn_local(async move {
            match crate::net::api::assign_manager(&id, &manager_id).await {
                Ok(_) => building.refetch(),
                Err(e) => action_error.set(e),
            }
        });
    };

    view! {
        <main class="building-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    building.get().flatten().map(|b| {
                        view! {
                            <div class="building-page__heading">
                                <a class="back-link" href="/">"← Back to Dashboard"</a>
                                <h1 class="building-page__name">{b.name.clone()}</h1>
                                <p class="building-page__address">{b.address.clone()}</p>
                            </div>
                        }
                    })
                }}
            </Suspense>

            <Show when=is_admin>
                <section class="building-page__admin">
                    <h2>"Building Administration"</h2>
                    <div class="building-page__admin-row">
                        <button class="btn" on:click=on_sync disabled=move || syncing.get()>
                            {move || if syncing.get() { "Syncing..." } else { "Sync Units from Telemetry" }}
                        </button>
                        <Show when=move || sync_report.get().is_some()>
                            <p class="building-page__sync-report">
                                {move || sync_report.get().as_ref().map(sync_summary)}
                            </p>
                        </Show>
                    </div>
                    <div class="building-page__admin-row">
                        <UserSelect value=manager_choice/>
                        <button class="btn" on:click=on_assign>
                            "Assign Home Lord"
                        </button>
                    </div>
                    <Show when=move || !action_error.get().is_empty()>
                        <p class="form-message form-message--error">{move || action_error.get()}</p>
                    </Show>
                </section>
            </Show>

            <section class="building-page__units">
                <div class="building-page__units-header">
                    <h2>"Units"</h2>
                </div>
                <Suspense fallback=move || view! { <p>"Loading units..."</p> }>
                    {move || {
                        units.get().map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="building-page__empty">"No units found in this building."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="unit-list">
                                        {list
                                            .into_iter()
                                            .map(|unit| {
                                                let href = format!("/units/{}", unit.id);
                                                view! {
                                                    <li class="unit-list__item">
                                                        <a class="unit-list__link" href=href>
                                                            <span class="unit-list__number">
                                                                {format!("Unit {}", unit.unit_number)}
                                                            </span>
                                                            <span class="unit-list__floor">
                                                                {format!("Floor {}", unit.floor)}
                                                            </span>
                                                            <span class="unit-list__area">
                                                                {format!("{} m² →", unit.area_m2)}
                                                            </span>
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
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
