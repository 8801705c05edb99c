use super::*;

#[test]
fn language_codes_round_trip() {
    assert_eq!(Language::from_code("cs"), Some(Language::Cs));
    assert_eq!(Language::from_code("en"), Some(Language::En));
    assert_eq!(Language::Cs.code(), "cs");
    assert_eq!(Language::En.code(), "en");
}

#[test]
fn unknown_codes_are_rejected() {
    assert_eq!(Language::from_code("de"), None);
    assert_eq!(Language::from_code(""), None);
}

#[test]
fn default_language_is_czech() {
    assert_eq!(Language::default(), Language::Cs);
}

#[test]
fn tables_are_distinct_per_language() {
    let cs = Language::Cs.table();
    let en = Language::En.table();
    assert_ne!(cs.login.title, en.login.title);
    assert_ne!(cs.invite.password_length_error, en.invite.password_length_error);
}
