//! Liberica release catalog client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use url::Url;

use crate::domain::AppError;
use crate::domain::catalog::Release;
use crate::ports::ReleaseSource;

pub const CATALOG_URL: &str = "https://api.bell-sw.com/v1/liberica/releases";
pub(crate) const CLIENT_USER_AGENT: &str = concat!("fieldkit/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the BellSoft release catalog.
#[derive(Debug, Clone)]
pub struct HttpReleaseSource {
    url: Url,
    client: Client,
}

impl HttpReleaseSource {
    pub fn new(url: Url, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { url, client })
    }

    /// Client for the public BellSoft endpoint.
    pub fn public(timeout_secs: u64) -> Result<Self, AppError> {
        let url = Url::parse(CATALOG_URL)
            .map_err(|e| AppError::Configuration(format!("Invalid catalog URL: {}", e)))?;
        Self::new(url, timeout_secs)
    }
}

impl ReleaseSource for HttpReleaseSource {
    fn fetch_catalog(&self) -> Result<serde_json::Value, AppError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Network(format!("catalog request returned {}", status)));
        }

        let body = response.text()?;
        parse_payload(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Parse a catalog body into its raw JSON array, keeping every field.
pub fn parse_payload(body: &str) -> Result<serde_json::Value, AppError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AppError::CatalogFormat(e.to_string()))?;
    if !value.is_array() {
        return Err(AppError::CatalogFormat("expected a JSON array of releases".into()));
    }
    Ok(value)
}

/// Decode the release objects of a raw catalog array.
pub fn decode_releases(payload: &serde_json::Value) -> Result<Vec<Release>, AppError> {
    Vec::<Release>::deserialize(payload).map_err(|e| AppError::CatalogFormat(e.to_string()))
}

/// Parse a catalog body straight into releases.
pub fn parse_catalog(body: &str) -> Result<Vec<Release>, AppError> {
    decode_releases(&parse_payload(body)?)
}
