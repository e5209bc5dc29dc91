//! Client for an Apache Tika compatible document-to-text endpoint.

use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::debug;

use tradedoc_core::models::config::TextConfig;

/// Sends raw document bytes with `PUT` and returns the response body as text.
pub struct TikaClient {
    client: reqwest::Client,
    url: String,
    accept: String,
}

impl TikaClient {
    pub fn new(url: impl Into<String>, config: &TextConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tradedoc/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            accept: config.accept.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Linearize a document through the service.
    pub async fn extract_text(&self, data: Vec<u8>) -> anyhow::Result<String> {
        debug!("Sending {} bytes to {}", data.len(), self.url);

        let response = self
            .client
            .put(&self.url)
            .header(ACCEPT, &self.accept)
            .body(data)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Text extraction service returned HTTP {}", response.status());
        }

        Ok(response.text().await?)
    }
}
