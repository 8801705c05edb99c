//! Persisted auth session (bearer token + user record).
//!
//! The token and the signed-in user live in `localStorage` under the same
//! keys the backend's other clients use. A cleared session is how every
//! 401 path signs the tab out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;
use crate::util::storage;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// The stored bearer token, if a session exists.
pub fn stored_token() -> Option<String> {
    storage::load_string(TOKEN_KEY)
}

/// The stored user record, if a session exists.
pub fn stored_user() -> Option<SessionUser> {
    storage::load_json(USER_KEY)
}

/// Persist a freshly established session.
pub fn store(token: &str, user: &SessionUser) {
    storage::save_string(TOKEN_KEY, token);
    storage::save_json(USER_KEY, user);
}

/// Drop the persisted session.
pub fn clear() {
    storage::remove(TOKEN_KEY);
    storage::remove(USER_KEY);
}
