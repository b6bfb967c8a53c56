//! Reverse command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::{create_formatter, BoxedWriter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use wordflip_api::{Scope, WordReverser};

/// Arguments for the reverse command
#[derive(Debug, Args)]
pub struct ReverseArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Reverse this text instead of reading files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Unit of reversal (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// Reject inputs longer than this many characters
    #[arg(long, value_name = "N")]
    pub max_chars: Option<usize>,

    /// Include processing metadata in the output
    #[arg(short, long)]
    pub metadata: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "WORDFLIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Reversal scopes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScopeArg {
    /// Whole input is one sentence
    Text,
    /// Each line is reversed on its own
    Line,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Text => Scope::Text,
            ScopeArg::Line => Scope::Line,
        }
    }
}

impl ReverseArgs {
    /// Execute the reverse command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting word reversal");
        log::debug!("Arguments: {:?}", self);

        let mut config = CliConfig::load_or_default(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        config.validate()?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&config.output.default_format)?,
        };
        let reverser = WordReverser::with_config(config.to_api_config()?);

        let source = InputSource::from_args(&self.input, self.text.as_deref())?;
        log::info!(
            "Reversing {} in {} scope",
            source.display_name(),
            reverser.config().scope
        );

        let writer: BoxedWriter = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, &config.output);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(source.len() as u64);

        for item in source.read_all() {
            let (name, text) = item?;
            let output = reverser
                .reverse_text(&text)
                .map_err(|e| CliError::ProcessingError(format!("{name}: {e}")))?;
            log::debug!(
                "{name}: {} words in {}ms",
                output.metadata.word_count,
                output.metadata.processing_time_ms
            );

            formatter.format_result(&name, &output)?;
            progress.file_completed(&name);
        }

        formatter.finish()?;
        progress.finish();

        Ok(())
    }

    /// Command-line flags take precedence over the config file
    fn apply_overrides(&self, config: &mut CliConfig) {
        if let Some(scope) = self.scope {
            config.processing.scope = Scope::from(scope).as_str().to_string();
        }
        if self.max_chars.is_some() {
            config.processing.max_chars = self.max_chars;
        }
        if self.metadata {
            config.output.include_metadata = true;
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when called more than once in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
