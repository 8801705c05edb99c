use super::*;

#[test]
fn trimmed_credentials_strips_whitespace() {
    assert_eq!(
        trimmed_credentials("  user@example.com  ", " secret "),
        Some(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn trimmed_credentials_requires_both_fields() {
    assert_eq!(trimmed_credentials("", "secret"), None);
    assert_eq!(trimmed_credentials("user@example.com", "   "), None);
    assert_eq!(trimmed_credentials("  ", ""), None);
}
