//! Placement wrapper for the language switcher.
//!
//! The unauthenticated full-screen routes (login, invite) float the
//! switcher over the page; everywhere else it sits in a header strip.

#[cfg(test)]
#[path = "lang_bar_test.rs"]
mod lang_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::lang_switch::LangSwitch;

/// Routes that render the switcher as a floating overlay.
fn is_overlay_path(path: &str) -> bool {
    path == "/login" || path.starts_with("/invite/")
}

/// Language switcher bar rendered above every route.
#[component]
pub fn LangBar() -> impl IntoView {
    let location = use_location();
    let class = move || {
        if is_overlay_path(&location.pathname.get()) {
            "lang-bar lang-bar--overlay"
        } else {
            "lang-bar"
        }
    };

    view! {
        <div class=class>
            <LangSwitch/>
        </div>
    }
}
