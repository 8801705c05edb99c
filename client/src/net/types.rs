//! DTOs mirroring the metering backend's JSON responses.
//!
//! DESIGN
//! ======
//! These records mirror the REST payloads 1:1 and carry no client-side
//! invariants beyond optional-field presence; the backend owns the source
//! of truth and the browser tab holds a transient copy. Numeric fields the
//! backend has historically emitted as floats deserialize tolerantly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A building as returned by `/buildings/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// Unique building identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Telemetry database holding this building's series, if configured.
    #[serde(default)]
    pub influx_db_name: Option<String>,
    /// Tag key identifying units inside the telemetry database.
    #[serde(default)]
    pub influx_unit_tag: Option<String>,
    /// Declared measurement series in `name[uom,kind]` list form.
    #[serde(default)]
    pub influx_measurements: Option<String>,
    /// Assigned manager ("Home Lord") user ID, if any.
    #[serde(default)]
    pub manager_id: Option<String>,
    /// Whether units have been synchronized from the telemetry store.
    #[serde(default)]
    pub units_fetched: bool,
}

/// Payload for `POST /buildings/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingDraft {
    pub name: String,
    pub address: String,
    pub description: String,
    pub influx_db_name: String,
    pub influx_unit_tag: String,
    pub influx_measurements: String,
}

/// A unit (apartment/office) inside a building.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique unit identifier (UUID string).
    pub id: String,
    /// Human unit designation (e.g. `bj-a01`).
    pub unit_number: String,
    /// Floor the unit is on.
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub floor: i32,
    /// Floor area in square meters.
    pub area_m2: f64,
    /// Building this unit belongs to (UUID string).
    pub building_id: String,
    /// Owner user ID, if assigned.
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// A physical meter installed in a unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meter {
    /// Unique meter identifier (UUID string).
    pub id: String,
    /// Manufacturer serial number.
    pub serial_number: String,
    /// Meter category (e.g. `water_cold`, `water_hot`, `heat`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Unit of measure the meter counts in (e.g. `m3`, `kWh`).
    pub unit_of_measure: String,
    /// Unit the meter is installed in (UUID string).
    pub unit_id: String,
}

/// One reading of a meter's cumulative counter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Reading row ID.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Counter value at `time`.
    pub value: f64,
    /// ISO 8601 timestamp string, as emitted by the backend.
    pub time: String,
    /// Whether the reading was entered by hand rather than ingested.
    #[serde(default)]
    pub is_manual: bool,
    /// Meter this reading belongs to (UUID string).
    pub meter_id: String,
}

/// A user account as returned by `/users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name, if set.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Role string: `admin`, `owner`, or `home_lord`.
    pub role: String,
}

/// Payload for `POST /users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub email: String,
    pub full_name: String,
    pub role: String,
}

/// Response to `POST /users/` — the created user plus their one-time invite token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name, if set.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Role string.
    pub role: String,
    /// One-time credential-setup token for the invite link.
    #[serde(default)]
    pub invite_token: Option<String>,
}

/// Response to the password grant (`POST /token`) and `POST /accept-invite`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for the `Authorization` header.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
    /// Role of the authenticated user.
    pub role: String,
    /// ID of the authenticated user (UUID string).
    pub user_id: String,
    /// Display name, when the backend includes it.
    #[serde(default)]
    pub full_name: Option<String>,
}

impl TokenResponse {
    /// The session record this response establishes.
    #[must_use]
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.user_id.clone(),
            role: self.role.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

/// The locally persisted identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User ID (UUID string).
    pub id: String,
    /// Role string.
    pub role: String,
    /// Display name, if known.
    #[serde(default)]
    pub full_name: Option<String>,
}

impl SessionUser {
    /// Whether this session may use admin-only building actions.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Response to `GET /validate-invite/{token}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteInfo {
    /// Email the invite was issued for, when the backend includes it.
    #[serde(default)]
    pub email: Option<String>,
    /// Invitee display name, when the backend includes it.
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Response to `POST /buildings/{id}/fetch_units`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSyncReport {
    /// Human-readable completion message.
    pub message: String,
    /// Units newly created during the sync.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub units_created: i64,
    /// Meters connected (created or re-attached) during the sync.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub meters_connected: i64,
    /// Distinct units found in the telemetry store.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub units_found: i64,
    /// Whether the building is now marked as synchronized.
    #[serde(default)]
    pub units_fetched: bool,
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    i32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for i32")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
