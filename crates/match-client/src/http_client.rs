//! reqwest-backed implementation of [`MatchClient`]

use crate::client::MatchClient;
use crate::error::FetchError;
use crate::types::{FootballMatch, MatchPage};
use async_trait::async_trait;

/// Fetches the listing with one HTTP GET per call
#[derive(Debug, Clone)]
pub struct HttpMatchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpMatchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Use a preconfigured reqwest client (proxies, custom TLS, ...)
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Decode a listing response body into its match records
pub fn decode_page(body: &str) -> Result<Vec<FootballMatch>, FetchError> {
    let page: MatchPage = serde_json::from_str(body)?;
    Ok(page.data)
}

#[async_trait]
impl MatchClient for HttpMatchClient {
    async fn fetch_matches(&self, page: u32) -> Result<Vec<FootballMatch>, FetchError> {
        log::debug!("Fetching matches from {} (page {})", self.endpoint, page);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("page", page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Match listing responded with {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let matches = decode_page(&body)?;
        log::info!("Fetched {} matches", matches.len());
        Ok(matches)
    }
}
