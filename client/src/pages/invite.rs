//! Invite-acceptance page: one-time credential setup for new users.
//!
//! Landing on an invite link always discards any existing session, then
//! validates the token before showing the password form. Acceptance logs
//! the new user straight in.

#[cfg(test)]
#[path = "invite_test.rs"]
mod invite_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::auth::AuthState;
use crate::state::lang::LangState;

/// Client-side password rules for invite acceptance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PasswordIssue {
    Mismatch,
    TooShort,
}

/// Check the new password pair; mismatch wins over length.
fn validate_invite_passwords(password: &str, confirm: &str) -> Result<(), PasswordIssue> {
    if password != confirm {
        return Err(PasswordIssue::Mismatch);
    }
    if password.chars().count() < 8 {
        return Err(PasswordIssue::TooShort);
    }
    Ok(())
}

/// Prefer the backend's detail message; bare status errors fall back to
/// the translated generic failure line.
fn acceptance_error(raw: &str, fallback: &'static str) -> String {
    if raw.contains("failed:") {
        fallback.to_owned()
    } else {
        raw.to_owned()
    }
}

/// Invite-acceptance page.
#[component]
pub fn InvitePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<LangState>>();
    let t = move || lang.get().language.table();

    let params = use_params_map();
    let token = move || params.read().get("token").unwrap_or_default();

    // An invite link always starts a fresh session.
    Effect::new(move || {
        crate::util::session::clear();
        auth.set(AuthState::restored(None));
    });

    let validity = LocalResource::new(move || {
        let token = token();
        async move { crate::net::api::validate_invite(&token).await }
    });

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(issue) = validate_invite_passwords(&password.get(), &confirm.get()) {
            error.set(
                match issue {
                    PasswordIssue::Mismatch => t().invite.password_match_error,
                    PasswordIssue::TooShort => t().invite.password_length_error,
                }
                .to_owned(),
            );
            return;
        }
        busy.set(true);
        error.set(String::new());

        let token_value = token();
        let password_value = password.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::accept_invite(&token_value, &password_value).await {
                Ok(session) => {
                    let user = session.session_user();
                    crate::util::session::store(&session.access_token, &user);
                    auth.set(AuthState::restored(Some(user)));
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    error.set(acceptance_error(&e, t().invite.failed_to_accept));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <main class="invite-page">
            <div class="invite-card">
                <Suspense fallback=move || view! { <p>"..."</p> }>
                    {move || {
                        validity.get().map(|outcome| match outcome {
                            Err(_) => {
                                view! {
                                    <p class="invite-card__invalid">
                                        {move || t().invite.invalid_invite}
                                    </p>
                                }
                                    .into_any()
                            }
                            Ok(info) => {
                                let email = info.email.clone();
                                view! {
                                    <div class="invite-card__body">
                                        <h1 class="invite-card__title">
                                            {move || t().invite.welcome}
                                        </h1>
                                        <p class="invite-card__subtitle">
                                            {move || t().invite.set_password_message}
                                        </p>
                                        {email
                                            .map(|address| {
                                                view! {
                                                    <p class="invite-card__email">{address}</p>
                                                }
                                            })}
                                        <Show when=move || !error.get().is_empty()>
                                            <p class="form-message form-message--error">
                                                {move || error.get()}
                                            </p>
                                        </Show>
                                        <form class="form" on:submit=on_submit.clone()>
                                            <label class="form__label">
                                                {move || t().invite.new_password}
                                                <input
                                                    class="form__input"
                                                    type="password"
                                                    required
                                                    prop:value=move || password.get()
                                                    on:input=move |ev| password.set(event_target_value(&ev))
                                                />
                                            </label>
                                            <label class="form__label">
                                                {move || t().invite.confirm_password}
                                                <input
                                                    class="form__input"
                                                    type="password"
                                                    required
                                                    prop:value=move || confirm.get()
                                                    on:input=move |ev| confirm.set(event_target_value(&ev))
                                                />
                                            </label>
                                            <button
                                                class="form__submit"
                                                type="submit"
                                                disabled=move || busy.get()
                                            >
                                                {move || {
                                                    if busy.get() {
                                                        t().invite.activating
                                                    } else {
                                                        t().invite.activate_account
                                                    }
                                                }}
                                            </button>
                                        </form>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </div>
        </main>
    }
}
