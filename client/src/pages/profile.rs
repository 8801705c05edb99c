//! Profile page: edit the display name, change the password.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// `home_lord` renders as `home lord`.
fn role_label(role: &str) -> String {
    role.replace('_', " ")
}

/// Checked password-change payload `(old, new)`, or the blocking message.
fn validate_password_change(
    old: &str,
    new: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    if new != confirm {
        return Err("New passwords do not match.");
    }
    if old.is_empty() || new.is_empty() {
        return Err("All password fields are required.");
    }
    Ok((old.to_owned(), new.to_owned()))
}

/// Profile page.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    auth::install_unauth_redirect(auth, use_navigate());

    let full_name = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Seed the form from the restored session.
    Effect::new(move || {
        if let Some(name) = auth.get().user.and_then(|u| u.full_name) {
            full_name.set(name);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name = full_name.get().trim().to_owned();
        if name.is_empty() {
            message.set("Full name cannot be empty.".to_owned());
            return;
        }
        busy.set(true);
        message.set(String::new());

        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&name).await {
                Ok(updated) => {
                    message.set("Profile updated successfully!".to_owned());
                    // Keep the reactive session and its persisted copy in step.
                    auth.update(|state| {
                        if let Some(user) = state.user.as_mut() {
                            user.full_name = updated.full_name.clone();
                        }
                    });
                    if let (Some(token), Some(user)) =
                        (crate::util::session::stored_token(), auth.get_untracked().user)
                    {
                        crate::util::session::store(&token, &user);
                    }
                }
                Err(e) => message.set(format!("Failed to update profile: {e}")),
            }
            busy.set(false);
        });
    };

    let role = move || {
        auth.get()
            .user
            .map(|u| role_label(&u.role))
            .unwrap_or_default()
    };

    view! {
        <main class="profile-page">
            <div class="profile-page__heading">
                <a class="back-link" href="/">"← Back to Dashboard"</a>
                <h1 class="profile-page__title">"Your Profile"</h1>
            </div>

            <section class="profile-page__card">
                <Show when=move || !message.get().is_empty()>
                    <p class="form-message">{move || message.get()}</p>
                </Show>
                <form class="form" on:submit=on_save>
                    <label class="form__label">
                        "Role"
                        <div class="profile-page__role">{role}</div>
                    </label>
                    <label class="form__label">
                        "Full Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </section>

            <section class="profile-page__card">
                <h2>"Change Password"</h2>
                <ChangePasswordForm/>
            </section>
        </main>
    }
}

/// Standalone password-change form posting to `/users/me/password`.
#[component]
fn ChangePasswordForm() -> impl IntoView {
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (old, new) = match validate_password_change(
            &old_password.get(),
            &new_password.get(),
            &confirm_password.get(),
        ) {
            Ok(payload) => payload,
            Err(blocked) => {
                message.set(blocked.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&old, &new).await {
                Ok(()) => {
                    message.set("Password changed successfully!".to_owned());
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => message.set(format!("Failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            <Show when=move || !message.get().is_empty()>
                <p class="form-message">{move || message.get()}</p>
            </Show>
            <label class="form__label">
                "Old Password"
                <input
                    class="form__input"
                    type="password"
                    required
                    prop:value=move || old_password.get()
                    on:input=move |ev| old_password.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "New Password"
                <input
                    class="form__input"
                    type="password"
                    required
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Confirm New Password"
                <input
                    class="form__input"
                    type="password"
                    required
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                />
            </label>
            <button class="form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Updating..." } else { "Update Password" }}
            </button>
        </form>
    }
}
