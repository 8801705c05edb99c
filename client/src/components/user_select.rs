//! User-picker select fed by the user directory.

#[cfg(test)]
#[path = "user_select_test.rs"]
mod user_select_test;

use leptos::prelude::*;

use crate::net::types::User;

/// `Full Name (email)` label with the email alone as fallback.
fn option_label(user: &User) -> String {
    match &user.full_name {
        Some(name) if !name.is_empty() => format!("{name} ({})", user.email),
        _ => user.email.clone(),
    }
}

/// Dropdown of all users; writes the selected user ID into `value`.
#[component]
pub fn UserSelect(value: RwSignal<String>) -> impl IntoView {
    let users = LocalResource::new(|| async {
        match crate::net::api::fetch_users().await {
            Ok(list) => list,
            Err(err) => {
                log::error!("failed to fetch users: {err}");
                Vec::new()
            }
        }
    });

    view! {
        <select
            class="user-select"
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            <option value="">"-- Select User --"</option>
            {move || {
                users.get().map(|list| {
                    list.into_iter()
                        .map(|user| {
                            let label = option_label(&user);
                            view! { <option value=user.id.clone()>{label}</option> }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </select>
    }
}
