//! Async HTTP client for the Alteg.io booking CRM.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AltegioConfig;
use crate::error::{ApiError, Result};
use crate::models::{
    ApiEnvelope, AuthCredentials, AuthData, ClientRecord, Company, NewClient, SeanceTick, Service,
    ServiceDetail,
};
use crate::slots::CompanyTimetable;

/// Media type for the v2 response envelope.
const ACCEPT_HEADER: &str = "application/vnd.api.v2+json";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// One authenticated session against the Alteg.io REST API.
///
/// The session's tokens are fixed into the `Authorization` header when the
/// client is built; a client with only a partner token can call
/// [`authenticate`](Self::authenticate) and the caller builds a fresh client
/// around the returned user token. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct AltegioClient {
    http: reqwest::Client,
    config: AltegioConfig,
}

impl AltegioClient {
    /// Build a client from an explicit session configuration.
    ///
    /// # Errors
    ///
    /// [`ApiError::ClientBuild`] when a token is not a valid header value or
    /// the TLS backend fails to initialize.
    pub fn new(config: AltegioConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

        let auth = match &config.user_token {
            Some(user_token) => format!("Bearer {}, User {}", config.partner_token, user_token),
            None => format!("Bearer {}", config.partner_token),
        };
        let auth = HeaderValue::from_str(&auth).map_err(|err| ApiError::ClientBuild {
            message: err.to_string(),
        })?;
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|err| ApiError::ClientBuild {
                message: err.to_string(),
            })?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AltegioConfig {
        &self.config
    }

    /// Exchange login credentials for a user token (`POST /auth`).
    ///
    /// Works on a partner-only session; the result does not change this
    /// client, build a new one with the token to use it.
    pub async fn authenticate(&self, credentials: &AuthCredentials) -> Result<AuthData> {
        self.post("auth", credentials).await
    }

    /// Companies visible to the session (`GET /companies`).
    pub async fn companies(&self) -> Result<Vec<Company>> {
        self.get("companies").await
    }

    /// A company's service list (`GET /company/{id}/services`).
    pub async fn services(&self, company_id: u64) -> Result<Vec<Service>> {
        self.get(&format!("company/{company_id}/services")).await
    }

    /// One service with its duration and staff roster.
    pub async fn service(&self, company_id: u64, service_id: u64) -> Result<ServiceDetail> {
        self.get(&format!("company/{company_id}/services/{service_id}"))
            .await
    }

    /// A staff member's per-tick timetable for one day, sorted by time.
    pub async fn timetable(
        &self,
        company_id: u64,
        staff_id: u64,
        date: NaiveDate,
    ) -> Result<Vec<SeanceTick>> {
        self.get(&format!("timetable/seances/{company_id}/{staff_id}/{date}"))
            .await
    }

    /// Days a company accepts online bookings for (`GET /book_dates/{id}`).
    ///
    /// The payload shape varies by deployment, so it is passed through as
    /// raw JSON.
    pub async fn book_dates(&self, company_id: u64) -> Result<serde_json::Value> {
        self.get(&format!("book_dates/{company_id}")).await
    }

    /// Search a company's client base (`POST /company/{id}/clients/search`).
    pub async fn clients(&self, company_id: u64) -> Result<Vec<ClientRecord>> {
        self.post(
            &format!("company/{company_id}/clients/search"),
            &serde_json::json!({}),
        )
        .await
    }

    /// Create a client record (`POST /clients/{id}`).
    pub async fn add_client(&self, company_id: u64, client: &NewClient) -> Result<ClientRecord> {
        self.post(&format!("clients/{company_id}"), client).await
    }

    /// Timetable capability scoped to one company, ready to hand to the
    /// engine's availability search.
    pub fn timetable_source(&self, company_id: u64) -> CompanyTimetable<'_> {
        CompanyTimetable::new(self, company_id)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        self.execute(self.http.get(&url), url).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        self.execute(self.http.post(&url).json(body), url).await
    }

    /// Single pipeline every endpoint goes through: send, check the HTTP
    /// status, decode the envelope, check its success flag, unwrap the data.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: String,
    ) -> Result<T> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status,
                body: body.trim().to_string(),
            });
        }

        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode {
                url: url.clone(),
                source,
            })?;

        if !envelope.success {
            return Err(ApiError::Rejected {
                url,
                message: envelope.rejection_message(),
            });
        }
        envelope.data.ok_or(ApiError::MissingData { url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}
