//! Reusable card component for building list items on the dashboard.

use leptos::prelude::*;

/// A clickable card representing a building in the dashboard grid.
#[component]
pub fn BuildingCard(
    id: String,
    name: String,
    address: String,
    description: Option<String>,
) -> impl IntoView {
    let href = format!("/buildings/{id}");

    view! {
        <a class="building-card" href=href>
            <span class="building-card__name">{name}</span>
            <span class="building-card__address">{address}</span>
            {description.map(|text| view! { <span class="building-card__description">{text}</span> })}
        </a>
    }
}
