//! HTTP client for the character API
//!
//! Thin wrapper over `reqwest` implementing [`CharacterSource`]. It only
//! decodes payloads into wire DTOs; interpretation is left to the
//! mapping layer.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::DataError;
use crate::ports::CharacterSource;
use crate::remote::responses::{CharacterPage, CharacterResponse};

const DEFAULT_API_BASE_URL: &str = "https://api.portaldex.io/api";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Client for the remote character API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_API_TIMEOUT_SECS)
    }

    /// Create a client against `base_url` with a request timeout in seconds.
    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    /// Create a client from `PORTALDEX_API_URL` and
    /// `PORTALDEX_API_TIMEOUT_SECS`, with defaults for both.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PORTALDEX_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());
        let timeout_secs = std::env::var("PORTALDEX_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        Self::with_timeout(base_url, timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn character_url(&self, id: i32) -> String {
        format!("{}/character/{id}", self.base_url)
    }

    fn characters_url(&self, page: Option<i32>) -> String {
        match page {
            Some(page) => format!("{}/character?page={page}", self.base_url),
            None => format!("{}/character", self.base_url),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DataError> {
        tracing::debug!(%url, "requesting character API");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DataError::http(e.to_string()))?;

        if let Err(err) = check_status(response.status()) {
            tracing::warn!(%url, error = %err, "character API returned an error");
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DataError::decode(e.to_string()))
    }
}

fn check_status(status: reqwest::StatusCode) -> Result<(), DataError> {
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(DataError::NotFound);
    }
    if !status.is_success() {
        return Err(DataError::Api {
            status: status.as_u16(),
        });
    }
    Ok(())
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[async_trait]
impl CharacterSource for ApiClient {
    async fn character(&self, id: i32) -> Result<CharacterResponse, DataError> {
        self.get_json(&self.character_url(id)).await
    }

    async fn characters(&self, page: Option<i32>) -> Result<CharacterPage, DataError> {
        self.get_json(&self.characters_url(page)).await
    }
}
