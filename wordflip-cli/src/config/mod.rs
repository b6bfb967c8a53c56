//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordflip_api::{ApiError, Config, Scope};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Default reversal scope ("text" or "line")
    pub scope: String,

    /// Maximum input size in characters
    pub max_chars: Option<usize>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            scope: Scope::default().as_str().to_string(),
            max_chars: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include metadata in output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_metadata: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check every value that the TOML schema alone cannot
    pub fn validate(&self) -> Result<()> {
        self.scope()?;
        crate::output::OutputFormat::parse(&self.output.default_format)?;
        self.to_api_config()?;
        Ok(())
    }

    /// Parsed scope
    pub fn scope(&self) -> Result<Scope> {
        self.processing
            .scope
            .parse::<Scope>()
            .map_err(config_error)
    }

    /// Build the library configuration
    pub fn to_api_config(&self) -> Result<Config> {
        Config::builder()
            .scope(self.scope()?)
            .max_chars(self.processing.max_chars)
            .build()
            .map_err(config_error)
    }
}

fn config_error(err: ApiError) -> anyhow::Error {
    match err {
        ApiError::Config(msg) => CliError::ConfigError(msg).into(),
        other => CliError::ConfigError(other.to_string()).into(),
    }
}
