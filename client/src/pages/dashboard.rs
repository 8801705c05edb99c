//! Dashboard page listing buildings.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the building list
//! once on mount and links out to user management, profile, and building
//! creation.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::building_card::BuildingCard;
use crate::state::auth::{self, AuthState};

/// Dashboard page — building cards plus management links.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    auth::install_unauth_redirect(auth, use_navigate());

    let buildings = LocalResource::new(|| async {
        match crate::net::api::fetch_buildings().await {
            Ok(list) => list,
            Err(err) => {
                log::error!("failed to fetch buildings: {err}");
                Vec::new()
            }
        }
    });

    view! {
        <main class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1 class="dashboard-page__title">"Homiq Dashboard"</h1>
                    <p class="dashboard-page__tagline">"Manage your properties and readings"</p>
                </div>
                <nav class="dashboard-page__links">
                    <a class="btn" href="/buildings/new">"New Building"</a>
                    <a class="btn" href="/users">"Manage Users"</a>
                    <a class="btn" href="/profile">"Profile"</a>
                </nav>
            </header>

            <Suspense fallback=move || view! { <p>"Loading buildings..."</p> }>
                {move || {
                    buildings.get().map(|list| {
                        if list.is_empty() {
                            view! {
                                <div class="dashboard-page__empty">
                                    "No buildings found. Create one to get started."
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="dashboard-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|b| {
                                            view! {
                                                <BuildingCard
                                                    id=b.id
                                                    name=b.name
                                                    address=b.address
                                                    description=b.description
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </main>
    }
}
