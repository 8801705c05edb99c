//! REST API helpers for the metering backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR) and native tests: inert stubs, since the backend is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so failed
//! fetches degrade to empty/error UI state. A 401 from any authenticated
//! call clears the stored session and redirects to `/login`; there is no
//! retry and no structured error taxonomy beyond the backend's `detail`
//! field, which is surfaced verbatim when present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Building, BuildingDraft, CreatedUser, InviteInfo, Meter, Reading, TokenResponse, Unit,
    UnitSyncReport, User, UserDraft,
};

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the metering backend.
///
/// Overridable at compile time via the `HOMIQ_API_URL` environment
/// variable so deployments can point the bundle elsewhere.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("HOMIQ_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn buildings_endpoint() -> String {
    endpoint("/buildings/")
}

#[cfg(any(test, feature = "hydrate"))]
fn building_endpoint(building_id: &str) -> String {
    endpoint(&format!("/buildings/{building_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn building_units_endpoint(building_id: &str) -> String {
    endpoint(&format!("/buildings/{building_id}/units"))
}

#[cfg(any(test, feature = "hydrate"))]
fn building_sync_endpoint(building_id: &str) -> String {
    endpoint(&format!("/buildings/{building_id}/fetch_units"))
}

#[cfg(any(test, feature = "hydrate"))]
fn assign_manager_endpoint(building_id: &str, manager_id: &str) -> String {
    endpoint(&format!(
        "/buildings/{building_id}/assign_manager?manager_id={manager_id}"
    ))
}

#[cfg(any(test, feature = "hydrate"))]
fn meters_endpoint() -> String {
    endpoint("/telemetry/meters/")
}

#[cfg(any(test, feature = "hydrate"))]
fn meter_readings_endpoint(meter_id: &str) -> String {
    endpoint(&format!("/telemetry/meters/{meter_id}/readings"))
}

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint() -> String {
    endpoint("/users/")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint() -> String {
    endpoint("/users/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn password_endpoint() -> String {
    endpoint("/users/me/password")
}

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint() -> String {
    endpoint("/token")
}

#[cfg(any(test, feature = "hydrate"))]
fn accept_invite_endpoint() -> String {
    endpoint("/accept-invite")
}

#[cfg(any(test, feature = "hydrate"))]
fn validate_invite_endpoint(token: &str) -> String {
    endpoint(&format!("/validate-invite/{token}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// OAuth2 password-grant form body; the backend reads the email from the
/// `username` field.
#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(email: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(email),
        urlencoding::encode(password)
    )
}

/// Pull the backend's `detail` message out of an error body, if present.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(ToOwned::to_owned)
}

#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Handle the uniform 401 contract: drop the session, bounce to login.
/// Returns true when the response was a 401.
#[cfg(feature = "hydrate")]
fn expire_session_on_401(resp: &gloo_net::http::Response) -> bool {
    if resp.status() != 401 {
        return false;
    }
    crate::util::session::clear();
    redirect_to_login();
    true
}

#[cfg(feature = "hydrate")]
fn with_bearer(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session::stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    what: &str,
) -> Result<T, String> {
    if !resp.ok() {
        let fallback = request_failed_message(what, resp.status());
        let body = resp.text().await.unwrap_or_default();
        return Err(error_detail(&body).unwrap_or(fallback));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn authed_get<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    let resp = with_bearer(gloo_net::http::Request::get(url))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if expire_session_on_401(&resp) {
        return Err(request_failed_message(what, 401));
    }
    read_json(resp, what).await
}

#[cfg(feature = "hydrate")]
async fn authed_send<T: serde::de::DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    what: &str,
) -> Result<T, String> {
    let resp = with_bearer(builder)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if expire_session_on_401(&resp) {
        return Err(request_failed_message(what, 401));
    }
    read_json(resp, what).await
}

#[cfg(feature = "hydrate")]
async fn authed_send_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
    what: &str,
) -> Result<T, String> {
    let resp = with_bearer(builder)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if expire_session_on_401(&resp) {
        return Err(request_failed_message(what, 401));
    }
    read_json(resp, what).await
}

/// Sign in with the OAuth2-style password grant (`POST /token`).
///
/// # Errors
///
/// Returns the backend's `detail` message when it sends one, otherwise a
/// generic status-bearing message.
pub async fn login(email: &str, password: &str) -> Result<TokenResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&token_endpoint())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(email, password))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "login").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Check an invite token via `GET /validate-invite/{token}`.
///
/// # Errors
///
/// Returns an error string for invalid or expired tokens.
pub async fn validate_invite(token: &str) -> Result<InviteInfo, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&validate_invite_endpoint(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "invite validation").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Redeem an invite token via `POST /accept-invite`, establishing a session.
///
/// # Errors
///
/// Returns the backend's `detail` message for rejected or reused tokens.
pub async fn accept_invite(token: &str, password: &str) -> Result<TokenResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "token": token, "password": password });
        let resp = gloo_net::http::Request::post(&accept_invite_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp, "invite acceptance").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch all buildings visible to the current user.
///
/// # Errors
///
/// Returns an error string when the request or decoding fails.
pub async fn fetch_buildings() -> Result<Vec<Building>, String> {
    #[cfg(feature = "hydrate")]
    {
        authed_get(&buildings_endpoint(), "building list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one building by ID.
///
/// # Errors
///
/// Returns an error string when the request or decoding fails.
pub async fn fetch_building(building_id: &str) -> Result<Building, String> {
    #[cfg(feature = "hydrate")]
    {
        authed_get(&building_endpoint(building_id), "building fetch").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = building_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the units of a building.
///
/// # Errors
///
/// Returns an error string when the request or decoding fails.
pub async fn fetch_building_units(building_id: &str) -> Result<Vec<Unit>, String> {
    #[cfg(feature = "hydrate")]
    {
        authed_get(&building_units_endpoint(building_id), "unit list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = building_id;
        Err("not available on server".to_owned())
    }
}

/// Create a building via `POST /buildings/`.
///
/// # Errors
///
/// Returns an error string when the request fails or is rejected.
pub async fn create_building(draft: &BuildingDraft) -> Result<Building, String> {
    #[cfg(feature = "hydrate")]
    {
        authed_send_json(
            gloo_net::http::Request::post(&buildings_endpoint()),
            draft,
            "building creation",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Synchronize a building's units and meters from the telemetry store.
///
/// # Errors
///
/// Returns an error string when the sync fails (e.g. no telemetry
/// database configured).
pub async fn sync_building_units(building_id: &str) -> Result<UnitSyncReport, String> {
    #[cfg(feature = "hydrate")]
    {
        authed_send(
            gloo_net::http::Request::post(&building_sync_endpoint(building_id)),
            "unit sync",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = building_id;
        Err("not available on server".to_owned())
    }
}

/// Assign a manager ("Home Lord") to a building.
///
/// # Errors
///
/// Returns the backend's `detail` message when the user is not a
/// Home Lord, otherwise a status-bearing message.
pub async fn assign_manager(building_id: &str, manager_id: &str) -> Result<Building, String> {
    #[cfg(feature = "hydrate")]
    {
        authed_send(
            gloo_net::http::Request::patch(&assign_manager_endpoint(building_id, manager_id)),
            "manager assignment",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (building_id, manager_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch every meter visible to the current user.
///
/// The backend has no per-unit meter listing; unit pages filter this.
///
/// # Errors
///
/// Returns an error string when the request or decoding fails.
pub async fn fetch_meters() -> Result<Vec<Meter>, String> {
    #[cfg(feature = "hydrate")]
    {
        authed_get(&meters_endpoint(), "meter list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a meter's readings, newest first.
///
/// # Errors
///
/// Returns an error string when the request or decoding fails.
pub async fn fetch_meter_readings(meter_id: &str) -> Result<Vec<Reading>, String> {
    #[cfg(feature = "hydrate")]
    {
        authed_get(&meter_readings_endpoint(meter_id), "reading list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = meter_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch all user accounts.
///
/// # Errors
///
/// Returns an error string when the request or decoding fails.
pub async fn fetch_users() -> Result<Vec<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        authed_get(&users_endpoint(), "user list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a user via `POST /users/`, returning their invite token.
///
/// # Errors
///
/// Returns an error string when the request fails or is rejected.
pub async fn create_user(draft: &UserDraft) -> Result<CreatedUser, String> {
    #[cfg(feature = "hydrate")]
    {
        authed_send_json(
            gloo_net::http::Request::post(&users_endpoint()),
            draft,
            "user creation",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Update the signed-in user's display name via `PATCH /users/me`.
///
/// # Errors
///
/// Returns an error string when the request fails or is rejected.
pub async fn update_profile(full_name: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "full_name": full_name });
        authed_send_json(
            gloo_net::http::Request::patch(&profile_endpoint()),
            &payload,
            "profile update",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = full_name;
        Err("not available on server".to_owned())
    }
}

/// Change the signed-in user's password via `POST /users/me/password`.
///
/// # Errors
///
/// Returns the backend's `detail` message (e.g. wrong old password) when
/// it sends one.
pub async fn change_password(old_password: &str, new_password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "old_password": old_password,
            "new_password": new_password,
        });
        let resp = with_bearer(gloo_net::http::Request::post(&password_endpoint()))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if expire_session_on_401(&resp) {
            return Err(request_failed_message("password change", 401));
        }
        if !resp.ok() {
            let fallback = request_failed_message("password change", resp.status());
            let body = resp.text().await.unwrap_or_default();
            return Err(error_detail(&body).unwrap_or(fallback));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (old_password, new_password);
        Err("not available on server".to_owned())
    }
}
