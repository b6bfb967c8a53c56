//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::load(&self.config).and_then(|config| {
            config.validate()?;
            Ok(config)
        }) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Scope: {}", config.processing.scope);
                match config.processing.max_chars {
                    Some(limit) => println!("  Max chars: {limit}"),
                    None => println!("  Max chars: unlimited"),
                }
                println!("  Default format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
