//! Units index — the unit list has no standalone screen; bounce home.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// `/units` redirects to the dashboard, replacing the history entry.
#[component]
pub fn UnitsIndexPage() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate(
            "/",
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });
}
