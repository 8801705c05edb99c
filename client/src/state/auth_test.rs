use super::*;

fn user(role: &str) -> SessionUser {
    SessionUser {
        id: "u-1".to_owned(),
        role: role.to_owned(),
        full_name: Some("Test User".to_owned()),
    }
}

#[test]
fn auth_state_starts_loading_without_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn restored_state_is_not_loading() {
    let state = AuthState::restored(Some(user("owner")));
    assert!(!state.loading);
    assert!(state.user.is_some());

    let empty = AuthState::restored(None);
    assert!(!empty.loading);
    assert!(empty.user.is_none());
}

#[test]
fn is_admin_requires_admin_role() {
    assert!(AuthState::restored(Some(user("admin"))).is_admin());
    assert!(!AuthState::restored(Some(user("home_lord"))).is_admin());
    assert!(!AuthState::restored(None).is_admin());
}
