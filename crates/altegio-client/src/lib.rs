//! # altegio-client
//!
//! Typed async client for the Alteg.io (ex-YCLIENTS) booking CRM REST API,
//! plus the glue that feeds its timetables into [`slot_engine`].
//!
//! Every call needs an [`AltegioConfig`] session: a partner token always,
//! a user token for account-scoped endpoints. Responses arrive in the API's
//! `{ success, data, meta }` envelope, which is unwrapped here so callers
//! only ever see decoded payloads or a typed [`ApiError`].
//!
//! ## Modules
//!
//! - [`config`] — session endpoint and tokens
//! - [`client`] — the HTTP client and its endpoints
//! - [`models`] — wire types and the response envelope
//! - [`slots`] — timetable source adapter and the one-call slot search
//! - [`error`] — request failures

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod slots;

pub use client::AltegioClient;
pub use config::{AltegioConfig, ConfigError, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use slots::{find_available_slots, CompanyTimetable, FindSlotsError};
