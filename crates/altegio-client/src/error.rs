//! Error types for Alteg.io API calls.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything that can go wrong between building a request and handing back
/// decoded data. Every variant names the URL it happened against.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a non-success HTTP status.
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// HTTP success, but the response envelope carried `success: false`.
    #[error("{url} rejected the request: {message}")]
    Rejected { url: String, message: String },

    /// The response body did not match the expected envelope shape.
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope reported success but carried no data payload.
    #[error("{url} returned an empty data payload")]
    MissingData { url: String },

    /// The HTTP client could not be built from the session configuration.
    #[error("failed to build HTTP client: {message}")]
    ClientBuild { message: String },
}
