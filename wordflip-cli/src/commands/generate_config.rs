//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   wordflip validate --config {}", self.output.display());
        println!("3. Use it for reversing:");
        println!(
            "   wordflip reverse -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    pub fn generate_template() -> String {
        r#"# wordflip configuration

[processing]
# Unit of reversal:
#   "text" - the whole input is one sentence, line breaks are separators
#   "line" - every line is reversed on its own and keeps its line break
scope = "text"

# Reject inputs longer than this many characters (unset = unlimited)
# max_chars = 1000000

[output]
# One of "text", "json", "markdown"
default_format = "text"

# Add word/character counts and scope to each result
include_metadata = false

# Indent JSON output
pretty_json = true
"#
        .to_string()
    }
}
