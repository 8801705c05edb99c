use super::*;

fn user(full_name: Option<&str>) -> User {
    User {
        id: "u-1".to_owned(),
        email: "jana@example.com".to_owned(),
        full_name: full_name.map(ToOwned::to_owned),
        role: "owner".to_owned(),
    }
}

#[test]
fn option_label_prefers_full_name() {
    assert_eq!(option_label(&user(Some("Jana Novak"))), "Jana Novak (jana@example.com)");
}

#[test]
fn option_label_falls_back_to_email() {
    assert_eq!(option_label(&user(None)), "jana@example.com");
    assert_eq!(option_label(&user(Some(""))), "jana@example.com");
}
