use super::*;

#[test]
fn validate_new_user_trims_fields() {
    let draft = validate_new_user(" new@example.com ", " New User ", "owner").expect("draft");
    assert_eq!(draft.email, "new@example.com");
    assert_eq!(draft.full_name, "New User");
    assert_eq!(draft.role, "owner");
}

#[test]
fn validate_new_user_rejects_empty_fields() {
    assert_eq!(validate_new_user("", "New User", "owner"), None);
    assert_eq!(validate_new_user("new@example.com", "  ", "owner"), None);
    assert_eq!(validate_new_user("new@example.com", "New User", ""), None);
}

#[test]
fn invite_link_joins_origin_and_token() {
    assert_eq!(
        invite_link("https://homiq.example.com", "inv-abc"),
        "https://homiq.example.com/invite/inv-abc"
    );
}

#[test]
fn invite_link_degrades_to_relative_without_origin() {
    assert_eq!(invite_link("", "inv-abc"), "/invite/inv-abc");
}
