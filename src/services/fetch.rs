//! Single-shot directory download
//!
//! The directory is served as one JSON array at a fixed path under the
//! site root. The download is issued exactly once per page lifetime and
//! its completion is delivered as a single [`FetchOutcome`] value; there
//! is no retry, no timeout beyond the client's own, and no cancellation.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tokio::time::Duration;
use url::Url;

use crate::types::UserRecord;

/// Fixed path of the directory document under the site root
pub const DIRECTORY_PATH: &str = "/users.json";

/// Default request timeout for the HTTP client
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Completion value of the one-shot directory download.
///
/// Exactly status 200 counts as success; any other status, a transport
/// failure, or a body that does not parse as a record array each map to
/// their own variant. Callers treat these as data, not faults.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Status 200 and a well-formed record array
    Success(Vec<UserRecord>),
    /// Request completed with a status other than 200
    HttpError(StatusCode),
    /// Status 200 but the body was not a well-formed record array
    ParseError(String),
    /// The request never completed (connect, DNS, or read failure)
    NetworkError(String),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

impl std::fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success(records) => write!(f, "loaded {} records", records.len()),
            Self::HttpError(status) => write!(f, "unexpected HTTP status {}", status),
            Self::ParseError(detail) => write!(f, "malformed directory document: {}", detail),
            Self::NetworkError(detail) => write!(f, "network error: {}", detail),
        }
    }
}

/// Creates a preconfigured HTTP client for directory downloads.
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    Client::builder()
        .timeout(timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
        .build()
        .context("Failed to build HTTP client")
}

/// Resolves the directory document URL against the site root.
pub fn directory_url(base_url: &Url) -> Result<Url> {
    base_url
        .join(DIRECTORY_PATH)
        .with_context(|| format!("Failed to resolve {} against {}", DIRECTORY_PATH, base_url))
}

/// Performs the one GET request for the directory document.
///
/// Never returns an error: every way the download can end is folded into
/// the returned [`FetchOutcome`] so the caller can record it in the store
/// and move on.
pub async fn fetch_directory(client: &Client, url: Url) -> FetchOutcome {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Failed to fetch user directory from {}: {}", url, e);
            return FetchOutcome::NetworkError(e.to_string());
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        tracing::debug!("Directory fetch from {} returned status {}", url, status);
        return FetchOutcome::HttpError(status);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to read directory body from {}: {}", url, e);
            return FetchOutcome::NetworkError(e.to_string());
        }
    };

    match serde_json::from_str::<Vec<UserRecord>>(&body) {
        Ok(records) => {
            tracing::debug!("Loaded user directory with {} records", records.len());
            FetchOutcome::Success(records)
        }
        Err(e) => {
            tracing::warn!("Directory document from {} did not parse: {}", url, e);
            FetchOutcome::ParseError(e.to_string())
        }
    }
}
