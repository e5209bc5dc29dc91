//! Configuration structures for the document pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TradeDocError};

/// Main configuration for tradedoc.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeDocConfig {
    /// Text extraction service configuration.
    pub text: TextConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Endpoint of the document-to-text service. When unset, documents are read locally.
    pub tika_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Value of the `Accept` header sent to the service.
    pub accept: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            tika_url: None,
            timeout_secs: 60,
            accept: "text/plain".to_string(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (`json`, `csv` or `text`).
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl TradeDocConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TradeDocError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TradeDocError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Endpoint to use, preferring an explicit override over the configured one.
    pub fn resolve_tika_url(&self, override_url: Option<&str>) -> Option<String> {
        override_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .or_else(|| self.text.tika_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: TradeDocConfig =
            serde_json::from_str(r#"{"text":{"tika_url":"http://localhost:9998/tika"}}"#).unwrap();
        assert_eq!(config.text.timeout_secs, 60);
        assert_eq!(config.text.accept, "text/plain");
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = TradeDocConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, TradeDocError::Config(_)));
    }

    #[test]
    fn test_resolve_tika_url() {
        let mut config = TradeDocConfig::default();
        assert_eq!(config.resolve_tika_url(None), None);

        config.text.tika_url = Some("http://tika:9998/tika".to_string());
        assert_eq!(
            config.resolve_tika_url(Some("http://other/tika")).as_deref(),
            Some("http://other/tika")
        );
        assert_eq!(
            config.resolve_tika_url(Some("  ")).as_deref(),
            Some("http://tika:9998/tika")
        );
    }
}
