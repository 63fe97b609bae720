mod defaults;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::FactError;
use defaults::*;

/// Top-level factbook configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub factbook: FactbookConfig,
    /// Extra fact collections keyed by language code. A language listed here
    /// replaces the built-in collection with the same code.
    #[serde(default)]
    pub facts: BTreeMap<String, Vec<String>>,
    /// File this config was read from; `None` when defaults were used.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactbookConfig {
    /// Language served when the caller does not name one.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for FactbookConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            log_level: default_log_level(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file, falling back to defaults if missing.
pub fn load(path: &str) -> Result<Config, FactError> {
    let expanded = shellexpand(path);
    let path = Path::new(&expanded);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let mut config = parse(&content)?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, FactError> {
    toml::from_str(content).map_err(|e| FactError::Config(format!("failed to parse config: {}", e)))
}
