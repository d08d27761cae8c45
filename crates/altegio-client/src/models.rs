//! Wire types for the Alteg.io REST API.
//!
//! Every response arrives wrapped in a `{ success, data, meta }` envelope;
//! `data` carries the payload and `meta` carries pagination counts or a
//! rejection message. Only the fields this crate consumes are modeled, serde
//! skips the rest of each object.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The `{ success, data, meta }` wrapper around every API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    // The explicit default path keeps the derived impl free of a `T: Default`
    // bound; payload types only ever need `Deserialize`.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub meta: serde_json::Value,
}

impl<T> ApiEnvelope<T> {
    /// Best-effort human message for a `success: false` envelope.
    pub fn rejection_message(&self) -> String {
        self.meta
            .get("message")
            .and_then(|message| message.as_str())
            .unwrap_or("no error message provided")
            .to_string()
    }
}

/// Login credentials exchanged for a user token via `POST /auth`.
#[derive(Debug, Clone, Serialize)]
pub struct AuthCredentials {
    pub login: String,
    pub password: String,
}

impl AuthCredentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

/// Payload of a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    pub user_token: String,
}

/// A company (salon branch) visible to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One entry of a company's service list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    /// Duration in seconds; zero or absent means never configured.
    #[serde(default)]
    pub seance_length: Option<u32>,
}

/// A single service with the details needed for a slot search.
///
/// `seance_length` is in seconds and defaults to zero when the remote omits
/// it, which downstream treats the same as "never configured".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub seance_length: u32,
    #[serde(default)]
    pub staff: Vec<ServiceStaff>,
}

/// Staff roster entry inside a service detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStaff {
    pub id: u64,
    pub name: String,
}

/// One five-minute tick of a staff member's day.
///
/// The wire flag is named `free`; it is renamed here so the type reads the
/// same way as the engine's samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeanceTick {
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    #[serde(rename = "free")]
    pub is_free: bool,
}

/// An existing client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body for creating a client record.
///
/// Mirrors the remote's optional-field contract: unset fields are omitted
/// from the JSON body entirely, never sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewClient {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_check: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_not: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

impl NewClient {
    /// A minimal record; name and phone are the only required fields.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }
}

/// Timetable times come as `"HH:MM"`; some deployments append seconds.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
