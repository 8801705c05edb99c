use super::*;

#[test]
fn login_and_invite_routes_use_the_overlay() {
    assert!(is_overlay_path("/login"));
    assert!(is_overlay_path("/invite/tok-123"));
}

#[test]
fn other_routes_use_the_header_strip() {
    assert!(!is_overlay_path("/"));
    assert!(!is_overlay_path("/users"));
    assert!(!is_overlay_path("/buildings/b-1"));
    assert!(!is_overlay_path("/invite"));
}
