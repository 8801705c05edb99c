//! User management page: directory listing plus account creation.
//!
//! Creating an account yields a one-time invite link (the backend mails
//! nothing itself); the link is surfaced here for the admin to pass on.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserDraft;
use crate::state::auth::{self, AuthState};

/// Trimmed create payload, or `None` when a required field is empty.
fn validate_new_user(email: &str, full_name: &str, role: &str) -> Option<UserDraft> {
    let email = email.trim();
    let full_name = full_name.trim();
    if email.is_empty() || full_name.is_empty() || role.is_empty() {
        return None;
    }
    Some(UserDraft {
        email: email.to_owned(),
        full_name: full_name.to_owned(),
        role: role.to_owned(),
    })
}

/// Absolute invite URL for a freshly issued token.
fn invite_link(origin: &str, token: &str) -> String {
    format!("{origin}/invite/{token}")
}

/// The browser origin, empty off-browser so links degrade to relative.
fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// User management page.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    auth::install_unauth_redirect(auth, use_navigate());

    let users = LocalResource::new(|| async {
        match crate::net::api::fetch_users().await {
            Ok(list) => list,
            Err(err) => {
                log::error!("failed to fetch users: {err}");
                Vec::new()
            }
        }
    });

    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let role = RwSignal::new("owner".to_owned());
    let error = RwSignal::new(String::new());
    let invite = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(draft) = validate_new_user(&email.get(), &full_name.get(), &role.get()) else {
            error.set("Email and full name are required.".to_owned());
            return;
        };
        busy.set(true);
        error.set(String::new());
        invite.set(None);

        leptos::task::spawn_local(async move {
            match crate::net::api::create_user(&draft).await {
                Ok(created) => {
                    email.set(String::new());
                    full_name.set(String::new());
                    role.set("owner".to_owned());
                    invite.set(
                        created
                            .invite_token
                            .map(|token| invite_link(&current_origin(), &token)),
                    );
                    users.refetch();
                }
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="users-page">
            <div class="users-page__heading">
                <a class="back-link" href="/">"← Back to Dashboard"</a>
                <h1 class="users-page__title">"User Management"</h1>
            </div>

            <div class="users-page__columns">
                <section class="users-page__create">
                    <h2>"Add New User"</h2>
                    <Show when=move || !error.get().is_empty()>
                        <p class="form-message form-message--error">{move || error.get()}</p>
                    </Show>
                    <Show when=move || invite.get().is_some()>
                        <p class="form-message form-message--invite">
                            "Invite link: "
                            <code>{move || invite.get().unwrap_or_default()}</code>
                        </p>
                    </Show>
                    <form class="form" on:submit=on_create>
                        <label class="form__label">
                            "Email"
                            <input
                                class="form__input"
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "Full Name"
                            <input
                                class="form__input"
                                type="text"
                                required
                                prop:value=move || full_name.get()
                                on:input=move |ev| full_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "Role"
                            <select
                                class="form__input"
                                prop:value=move || role.get()
                                on:change=move |ev| role.set(event_target_value(&ev))
                            >
                                <option value="owner">"Owner"</option>
                                <option value="admin">"Admin"</option>
                                <option value="home_lord">"Home Lord"</option>
                            </select>
                        </label>
                        <button class="form__submit" type="submit" disabled=move || busy.get()>
                            "Create User"
                        </button>
                    </form>
                </section>

                <section class="users-page__list">
                    <h2>"All Users"</h2>
                    <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                        {move || {
                            users.get().map(|list| {
                                if list.is_empty() {
                                    view! { <p class="users-page__empty">"No users found."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="user-list">
                                            {list
                                                .into_iter()
                                                .map(|user| {
                                                    view! {
                                                        <li class="user-list__item">
                                                            <div>
                                                                <p class="user-list__name">
                                                                    {user.full_name.clone().unwrap_or_else(|| user.email.clone())}
                                                                </p>
                                                                <p class="user-list__email">{user.email.clone()}</p>
                                                            </div>
                                                            <span class="user-list__role">{user.role.clone()}</span>
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
            </div>
        </main>
    }
}
