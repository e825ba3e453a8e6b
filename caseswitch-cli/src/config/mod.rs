//! Configuration module
//!
//! The optional `--config` file is TOML with two tables:
//!
//! ```toml
//! [settings]
//! language = "pt-BR"
//! acronyms = ["ONU", "NASA"]
//!
//! [settings.enabledModes]
//! slug = false
//!
//! [output]
//! default_format = "json"
//! pretty_json = true
//! ```

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use caseswitch_core::Settings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Transformation settings
    #[serde(default)]
    pub settings: Settings,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        let unknown = config.settings.unknown_mode_ids();
        if !unknown.is_empty() {
            log::warn!("Ignoring unknown modes in settings: {}", unknown.join(", "));
        }

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }
}
