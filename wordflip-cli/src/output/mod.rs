//! Output formatting module

use crate::config::OutputConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;
use wordflip_api::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for one input
    fn format_result(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The reversed text as-is
    Text,
    /// JSON array of results with optional metadata
    Json,
    /// Markdown section per input
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn parse(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{name}'")).into()
        })
    }

    /// Short description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "reversed text only",
            OutputFormat::Json => "JSON array with source names and metadata",
            OutputFormat::Markdown => "one fenced block per input",
        }
    }
}

/// Writer the formatters print to
pub type BoxedWriter = Box<dyn Write + Send + Sync>;

/// Build the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: BoxedWriter,
    options: &OutputConfig,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.include_metadata)),
        OutputFormat::Json => Box::new(JsonFormatter::new(
            writer,
            options.include_metadata,
            options.pretty_json,
        )),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new(writer, options.include_metadata))
        }
    }
}
