//! HTTP content fetcher.
//!
//! Implements the engine's [`LogFetcher`] collaborator with reqwest. Every
//! failure mode (HTTP status, timeout, transport error) maps to `None`;
//! nothing is retried and nothing propagates into the triage flow.

use std::time::Duration;

use async_trait::async_trait;
use farm_triage_core::LogFetcher;
use tracing::warn;

use crate::config::FarmConfig;

/// Per-request timeout. Artifact servers can be slow; logs past this are
/// treated as unavailable.
const FETCH_TIMEOUT_SECS: u64 = 30;

/// Content fetcher backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
}

impl HttpFetcher {
    /// Create a fetcher for the given endpoints.
    ///
    /// The bearer token is attached only to requests against the API base
    /// URL, never to artifact fetches.
    pub fn new(config: &FarmConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("farm-triage/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;

        Ok(HttpFetcher {
            client,
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn is_api_url(&self, url: &str) -> bool {
        url.starts_with(&self.api_url)
    }
}

#[async_trait]
impl LogFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.api_token {
            if self.is_api_url(url) {
                request = request.bearer_auth(token);
            }
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to fetch");
                return None;
            }
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to fetch");
                return None;
            }
        };

        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(url = %url, error = %e, "failed to read body");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(token: Option<&str>) -> HttpFetcher {
        let config = FarmConfig {
            api_url: "https://api.testing-farm.io/v0.1".to_string(),
            artifacts_url: "https://artifacts.dev.testing-farm.io".to_string(),
            api_token: token.map(|t| t.to_string()),
        };
        HttpFetcher::new(&config).expect("client build failed")
    }

    #[test]
    fn test_api_url_detection() {
        let f = fetcher(Some("secret"));
        assert!(f.is_api_url("https://api.testing-farm.io/v0.1/requests/abc"));
        assert!(!f.is_api_url("https://artifacts.dev.testing-farm.io/abc/console.log"));
    }

    #[tokio::test]
    async fn test_unreachable_url_yields_none() {
        // Reserved TEST-NET address; connection fails fast or times out,
        // either way the fetcher must answer None.
        let f = fetcher(None);
        let result = f.fetch("http://192.0.2.1:9/never").await;
        assert!(result.is_none());
    }
}
