//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::lang_bar::LangBar;
use crate::pages::{
    building_detail::BuildingDetailPage, building_new::BuildingNewPage, dashboard::DashboardPage,
    invite::InvitePage, login::LoginPage, profile::ProfilePage, unit_detail::UnitDetailPage,
    units::UnitsIndexPage, users::UsersPage,
};
use crate::state::auth::AuthState;
use crate::state::lang::{self, LangState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="cs">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and language contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let lang_state = RwSignal::new(LangState::default());
    provide_context(auth);
    provide_context(lang_state);

    // Restore the persisted session and language once the browser drives.
    Effect::new(move || {
        auth.set(AuthState::restored(crate::util::session::stored_user()));
        lang_state.set(LangState { language: lang::read_preference() });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/homiq.css"/>
        <Title text="Homiq"/>

        <Router>
            <LangBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("buildings"), StaticSegment("new")) view=BuildingNewPage/>
                <Route path=(StaticSegment("buildings"), ParamSegment("id")) view=BuildingDetailPage/>
                <Route path=StaticSegment("units") view=UnitsIndexPage/>
                <Route path=(StaticSegment("units"), ParamSegment("id")) view=UnitDetailPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=(StaticSegment("invite"), ParamSegment("token")) view=InvitePage/>
            </Routes>
        </Router>
    }
}
