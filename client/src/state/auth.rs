//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and role-aware components to coordinate login
//! redirects and admin-only actions. The persisted half of the session
//! lives in `util::session`; this is the reactive in-memory half.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::SessionUser;

/// Authentication state tracking the current user and restore status.
///
/// `loading` is true until the boot effect has had a chance to restore a
/// persisted session, so guards do not redirect during the first render.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// State after the persisted session has been consulted.
    #[must_use]
    pub fn restored(user: Option<SessionUser>) -> Self {
        Self { user, loading: false }
    }

    /// Whether the current session has the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_admin)
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
///
/// Every authenticated route installs this; `/login` and `/invite/*` do not.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
