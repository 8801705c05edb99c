use super::*;

#[test]
fn mismatched_passwords_are_rejected_first() {
    assert_eq!(
        validate_invite_passwords("short", "different"),
        Err(PasswordIssue::Mismatch)
    );
}

#[test]
fn short_passwords_are_rejected() {
    assert_eq!(
        validate_invite_passwords("1234567", "1234567"),
        Err(PasswordIssue::TooShort)
    );
}

#[test]
fn length_counts_characters_not_bytes() {
    // Eight Czech characters, more than eight bytes.
    assert_eq!(validate_invite_passwords("řeřichaa", "řeřichaa"), Ok(()));
}

#[test]
fn matching_long_passwords_pass() {
    assert_eq!(validate_invite_passwords("long-enough", "long-enough"), Ok(()));
}

#[test]
fn acceptance_error_prefers_backend_detail() {
    assert_eq!(
        acceptance_error("Invite token already used", "fallback"),
        "Invite token already used"
    );
}

#[test]
fn acceptance_error_hides_bare_status_messages() {
    assert_eq!(
        acceptance_error("invite acceptance failed: 500", "fallback"),
        "fallback"
    );
}
