//! Building creation form.
//!
//! The measurement-declaration string is validated (and canonicalized)
//! client-side before the draft is submitted, so a typo in the grammar
//! never reaches the backend.

#[cfg(test)]
#[path = "building_new_test.rs"]
mod building_new_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::BuildingDraft;
use crate::state::auth::{self, AuthState};

/// Build a validated create payload, or the message blocking submission.
///
/// Name and address are required; the measurement list must parse, and is
/// stored in its canonical serialized form.
fn validate_draft(
    name: &str,
    address: &str,
    description: &str,
    influx_db_name: &str,
    influx_unit_tag: &str,
    influx_measurements: &str,
) -> Result<BuildingDraft, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.".to_owned());
    }
    let address = address.trim();
    if address.is_empty() {
        return Err("Address is required.".to_owned());
    }
    let measurements = metering::parse_measurements(influx_measurements)
        .map_err(|err| format!("Measurements: {err}"))?;

    Ok(BuildingDraft {
        name: name.to_owned(),
        address: address.to_owned(),
        description: description.trim().to_owned(),
        influx_db_name: influx_db_name.trim().to_owned(),
        influx_unit_tag: influx_unit_tag.trim().to_owned(),
        influx_measurements: metering::serialize_measurements(&measurements),
    })
}

/// Building creation page — on success navigates to the new detail route.
#[component]
pub fn BuildingNewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    auth::install_unauth_redirect(auth, use_navigate());

    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let influx_db_name = RwSignal::new(String::new());
    let influx_unit_tag = RwSignal::new(String::new());
    let influx_measurements = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_draft(
            &name.get(),
            &address.get(),
            &description.get(),
            &influx_db_name.get(),
            &influx_unit_tag.get(),
            &influx_measurements.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_building(&draft).await {
                Ok(created) => {
                    navigate(&format!("/buildings/{}", created.id), NavigateOptions::default());
                }
                Err(e) => {
                    error.set(e);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <main class="form-page">
            <div class="form-card">
                <a class="back-link" href="/">"← Back to Dashboard"</a>
                <h1 class="form-card__title">"Create New Building"</h1>

                <Show when=move || !error.get().is_empty()>
                    <p class="form-message form-message--error">{move || error.get()}</p>
                </Show>

                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Name"
                        <input
                            class="form__input"
                            type="text"
                            required
                            placeholder="e.g. Sunrise Apartments"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Address"
                        <input
                            class="form__input"
                            type="text"
                            required
                            placeholder="e.g. 123 Main St"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Telemetry Database Name"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="e.g. homiq_db_01"
                            prop:value=move || influx_db_name.get()
                            on:input=move |ev| influx_db_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Telemetry Unit Tag"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="e.g. unit (default) or jednotka"
                            prop:value=move || influx_unit_tag.get()
                            on:input=move |ev| influx_unit_tag.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Measurements (Optional)"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="e.g. sv_l[m3,Cold Water], tea_kwh[kWh,Heating]"
                            prop:value=move || influx_measurements.get()
                            on:input=move |ev| influx_measurements.set(event_target_value(&ev))
                        />
                        <span class="form__hint">"Format: name[uom,kind], ..."</span>
                    </label>
                    <label class="form__label">
                        "Description"
                        <textarea
                            class="form__input"
                            rows="3"
                            placeholder="Optional description..."
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="form__submit" type="submit" disabled=move || busy.get()>
                        "Create Building"
                    </button>
                </form>
            </div>
        </main>
    }
}
