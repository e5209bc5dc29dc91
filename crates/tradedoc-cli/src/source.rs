//! Where document text comes from: the extraction service when one is configured,
//! otherwise local PDF/plain-text reading.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use tradedoc_core::pdf;
use tradedoc_core::TradeDocConfig;

use crate::tika::TikaClient;

pub enum TextSource {
    Service(TikaClient),
    Local,
}

impl TextSource {
    pub fn from_config(config: &TradeDocConfig, tika_url: Option<&str>) -> anyhow::Result<Self> {
        match config.resolve_tika_url(tika_url) {
            Some(url) => {
                info!("Using text extraction service at {}", url);
                Ok(TextSource::Service(TikaClient::new(url, &config.text)?))
            }
            None => {
                info!("No text extraction service configured, reading documents locally");
                Ok(TextSource::Local)
            }
        }
    }

    /// Linearized text of a document.
    pub async fn read(&self, path: &Path) -> anyhow::Result<String> {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let text = match self {
            TextSource::Service(client) => client
                .extract_text(data)
                .await
                .with_context(|| format!("{} could not convert {}", client.url(), path.display()))?,
            TextSource::Local => pdf::document_text(path, &data)
                .with_context(|| format!("Failed to extract text from {}", path.display()))?,
        };

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_without_endpoint() {
        let source = TextSource::from_config(&TradeDocConfig::default(), None).unwrap();
        assert!(matches!(source, TextSource::Local));
    }

    #[test]
    fn test_flag_overrides_config() {
        let mut config = TradeDocConfig::default();
        config.text.tika_url = Some("http://configured:9998/tika".to_string());

        let source = TextSource::from_config(&config, Some("http://flag:9998/tika")).unwrap();
        match source {
            TextSource::Service(client) => assert_eq!(client.url(), "http://flag:9998/tika"),
            TextSource::Local => panic!("expected the extraction service"),
        }
    }

    #[tokio::test]
    async fn test_read_plain_text_locally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coa.txt");
        std::fs::write(&path, "Material number = 100234\n").unwrap();

        let text = TextSource::Local.read(&path).await.unwrap();
        assert_eq!(text, "Material number = 100234\n");
    }
}
