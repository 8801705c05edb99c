use super::*;

#[test]
fn role_label_replaces_underscores() {
    assert_eq!(role_label("home_lord"), "home lord");
    assert_eq!(role_label("admin"), "admin");
}

#[test]
fn validate_password_change_accepts_matching_pair() {
    assert_eq!(
        validate_password_change("old-secret", "new-secret", "new-secret"),
        Ok(("old-secret".to_owned(), "new-secret".to_owned()))
    );
}

#[test]
fn validate_password_change_rejects_mismatch() {
    assert_eq!(
        validate_password_change("old-secret", "new-secret", "other"),
        Err("New passwords do not match.")
    );
}

#[test]
fn validate_password_change_requires_all_fields() {
    assert_eq!(
        validate_password_change("", "new-secret", "new-secret"),
        Err("All password fields are required.")
    );
    assert_eq!(
        validate_password_change("old-secret", "", ""),
        Err("All password fields are required.")
    );
}
