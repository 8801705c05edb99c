//! Login page with the password-grant sign-in form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::lang::LangState;

/// Trimmed credentials, or `None` when either field is empty.
fn trimmed_credentials(email: &str, password: &str) -> Option<(String, String)> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return None;
    }
    Some((email.to_owned(), password.to_owned()))
}

/// Login page — on success stores the session and navigates to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<LangState>>();
    let t = move || lang.get().language.table();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some((email_value, password_value)) =
            trimmed_credentials(&email.get(), &password.get())
        else {
            error.set(t().login.error.to_owned());
            return;
        };
        busy.set(true);
        error.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(token) => {
                    let user = token.session_user();
                    crate::util::session::store(&token.access_token, &user);
                    auth.set(AuthState::restored(Some(user)));
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    error.set(e);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-card__title">{move || t().login.title}</h2>
                <p class="login-card__subtitle">{move || t().login.subtitle}</p>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        required
                        placeholder=move || t().common.email
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        required
                        placeholder=move || t().common.password
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || t().common.sign_in}
                    </button>
                </form>
            </div>
        </div>
    }
}
