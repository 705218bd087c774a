//! REST client for the upstream catalog API.

use crate::types::Browser;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default API endpoint serving the flat browser/device catalog.
pub const DEFAULT_ENDPOINT: &str = "https://api.browserstack.com/4";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Authenticated client for the catalog REST API.
pub struct RestClient {
    http: reqwest::Client,
    endpoint: String,
    username: String,
    access_key: String,
}

impl RestClient {
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        let endpoint = endpoint.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            endpoint,
            username: username.into(),
            access_key: access_key.into(),
        })
    }

    /// Fetches the full browser/device catalog as a flat list.
    pub async fn browsers(&self) -> Result<Vec<Browser>, ClientError> {
        let url = format!("{}/browsers?flat=true", self.endpoint);
        debug!(%url, "fetching catalog");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.access_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
