#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preference_defaults_to_czech_without_a_browser() {
    assert_eq!(read_preference(), Language::Cs);
}

#[test]
fn store_preference_is_noop_but_callable() {
    store_preference(Language::En);
    assert_eq!(read_preference(), Language::Cs);
}

#[test]
fn lang_state_defaults_to_czech() {
    assert_eq!(LangState::default().language, Language::Cs);
}
