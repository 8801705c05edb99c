#![cfg(not(feature = "hydrate"))]

use super::*;

// Without a browser the storage stubs are inert; these assert the
// non-hydrate contract pages rely on during SSR and native tests.

#[test]
fn stored_token_is_none_without_a_browser() {
    assert!(stored_token().is_none());
}

#[test]
fn stored_user_is_none_without_a_browser() {
    assert!(stored_user().is_none());
}

#[test]
fn store_and_clear_are_noops_but_callable() {
    let user = SessionUser {
        id: "u-1".to_owned(),
        role: "owner".to_owned(),
        full_name: None,
    };
    store("tok", &user);
    assert!(stored_token().is_none());
    clear();
}
