//! Subcommands.

pub mod compare;
pub mod config;
pub mod extract;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

use tradedoc_core::TradeDocConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text table
    Text,
}

impl OutputFormat {
    /// Explicit choice, else the configured default, else text.
    pub fn resolve(explicit: Option<OutputFormat>, config: &TradeDocConfig) -> OutputFormat {
        explicit
            .or_else(|| <OutputFormat as ValueEnum>::from_str(&config.output.format, true).ok())
            .unwrap_or(OutputFormat::Text)
    }
}

/// Location of the config file, honouring `-c/--config`.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path)
}

/// Load the config file. An explicit path must exist; the default one is optional.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<TradeDocConfig> {
    if let Some(path) = explicit {
        return Ok(TradeDocConfig::from_file(Path::new(path))?);
    }

    let path = config::default_config_path();
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(TradeDocConfig::from_file(&path)?)
    } else {
        Ok(TradeDocConfig::default())
    }
}
