//! High-level configuration API

use crate::error::{ApiError, Result};
use std::fmt;
use std::str::FromStr;

/// Unit of text handed to the word reverser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scope {
    /// The whole input is one sentence; line breaks are separators
    #[default]
    Text,
    /// Every line is reversed on its own and keeps its terminator
    Line,
}

impl Scope {
    /// All scopes, in display order
    pub const ALL: [Scope; 2] = [Scope::Text, Scope::Line];

    /// Name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Text => "text",
            Scope::Line => "line",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Scope::Text),
            "line" => Ok(Scope::Line),
            other => Err(ApiError::Config(format!("unknown scope '{other}'"))),
        }
    }
}

/// Configuration for a [`WordReverser`](crate::WordReverser)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Unit of reversal
    pub scope: Scope,
    /// Reject inputs longer than this many characters (None = unlimited)
    pub max_chars: Option<usize>,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration that reverses each line independently
    pub fn per_line() -> Self {
        Self {
            scope: Scope::Line,
            ..Self::default()
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the scope
    pub fn scope(mut self, scope: Scope) -> Self {
        self.config.scope = scope;
        self
    }

    /// Set the scope from its name
    pub fn scope_name(self, name: &str) -> Result<Self> {
        Ok(self.scope(name.parse()?))
    }

    /// Set the input size limit in characters
    pub fn max_chars(mut self, max_chars: Option<usize>) -> Self {
        self.config.max_chars = max_chars;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.max_chars == Some(0) {
            return Err(ApiError::Config(
                "max_chars must be greater than zero".to_string(),
            ));
        }

        Ok(self.config)
    }
}
