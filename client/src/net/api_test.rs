use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn api_base_defaults_to_local_backend() {
    assert_eq!(api_base(), "http://localhost:8000");
}

#[test]
fn building_endpoints_format_expected_paths() {
    assert_eq!(buildings_endpoint(), "http://localhost:8000/buildings/");
    assert_eq!(building_endpoint("b-1"), "http://localhost:8000/buildings/b-1");
    assert_eq!(
        building_units_endpoint("b-1"),
        "http://localhost:8000/buildings/b-1/units"
    );
    assert_eq!(
        building_sync_endpoint("b-1"),
        "http://localhost:8000/buildings/b-1/fetch_units"
    );
    assert_eq!(
        assign_manager_endpoint("b-1", "u-9"),
        "http://localhost:8000/buildings/b-1/assign_manager?manager_id=u-9"
    );
}

#[test]
fn telemetry_endpoints_format_expected_paths() {
    assert_eq!(meters_endpoint(), "http://localhost:8000/telemetry/meters/");
    assert_eq!(
        meter_readings_endpoint("m-1"),
        "http://localhost:8000/telemetry/meters/m-1/readings"
    );
}

#[test]
fn user_and_auth_endpoints_format_expected_paths() {
    assert_eq!(users_endpoint(), "http://localhost:8000/users/");
    assert_eq!(profile_endpoint(), "http://localhost:8000/users/me");
    assert_eq!(password_endpoint(), "http://localhost:8000/users/me/password");
    assert_eq!(token_endpoint(), "http://localhost:8000/token");
    assert_eq!(accept_invite_endpoint(), "http://localhost:8000/accept-invite");
    assert_eq!(
        validate_invite_endpoint("tok-1"),
        "http://localhost:8000/validate-invite/tok-1"
    );
}

// =============================================================
// Message + body helpers
// =============================================================

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("building list", 500), "building list failed: 500");
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
}

#[test]
fn login_form_body_uses_username_field() {
    assert_eq!(
        login_form_body("user@example.com", "secret"),
        "username=user%40example.com&password=secret"
    );
}

#[test]
fn login_form_body_escapes_reserved_characters() {
    assert_eq!(
        login_form_body("a+b@example.com", "p&ss=w0rd"),
        "username=a%2Bb%40example.com&password=p%26ss%3Dw0rd"
    );
}

#[test]
fn error_detail_extracts_backend_message() {
    assert_eq!(
        error_detail(r#"{"detail":"Incorrect email or password"}"#),
        Some("Incorrect email or password".to_owned())
    );
}

#[test]
fn error_detail_ignores_unexpected_bodies() {
    assert_eq!(error_detail(""), None);
    assert_eq!(error_detail("<html>oops</html>"), None);
    assert_eq!(error_detail(r#"{"detail":{"nested":true}}"#), None);
}
