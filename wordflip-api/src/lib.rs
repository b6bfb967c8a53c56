//! Public API for wordflip word order reversal
//!
//! This crate wraps the two-pass reverser from `wordflip-core` with input
//! sources, configuration and output metadata.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::time::Instant;
use wordflip_core::{reverse_words, runs};

// Re-export key types
pub use config::{Config, ConfigBuilder, Scope};
pub use dto::{Input, Metadata, Output};
pub use error::{ApiError, Result};

/// Main entry point for word reversal
///
/// Holds only immutable configuration, so one instance can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct WordReverser {
    config: Config,
}

impl WordReverser {
    /// Create a reverser with default configuration (whole-text scope)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reverser with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read `input` and reverse its words
    pub fn process(&self, input: Input) -> Result<Output> {
        log::debug!("reading input {input:?}");
        let text = input.read_text()?;
        self.reverse_text(&text)
    }

    /// Reverse the words of `text`
    pub fn reverse_text(&self, text: &str) -> Result<Output> {
        let start = Instant::now();

        let total_chars = text.chars().count();
        if let Some(limit) = self.config.max_chars {
            if total_chars > limit {
                return Err(ApiError::InputTooLarge {
                    chars: total_chars,
                    limit,
                });
            }
        }

        let (word_count, separator_runs) = runs(text).fold((0, 0), |(words, seps), run| {
            if run.is_word() {
                (words + 1, seps)
            } else {
                (words, seps + 1)
            }
        });

        let reversed = match self.config.scope {
            Scope::Text => reverse_words(text),
            Scope::Line => reverse_lines(text),
        };

        let elapsed = start.elapsed();
        log::debug!(
            "reversed {total_chars} chars ({word_count} words) in {}us",
            elapsed.as_micros()
        );

        Ok(Output {
            text: reversed,
            metadata: Metadata {
                total_bytes: text.len(),
                total_chars,
                word_count,
                separator_runs,
                lines: text.lines().count(),
                scope: self.config.scope,
                processing_time_ms: elapsed.as_millis() as u64,
            },
        })
    }
}

/// Reverse every line on its own; `\n` and `\r\n` stay at the end of their line
fn reverse_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let body = line
            .strip_suffix("\r\n")
            .or_else(|| line.strip_suffix('\n'))
            .unwrap_or(line);
        out.push_str(&reverse_words(body));
        out.push_str(&line[body.len()..]);
    }
    out
}

// Convenience functions

/// Reverse the words of `text` with default configuration
pub fn reverse_text(text: &str) -> Result<Output> {
    WordReverser::new().reverse_text(text)
}

/// Reverse the words of a file with default configuration
pub fn reverse_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    WordReverser::new().process(Input::from_file(path.as_ref().to_path_buf()))
}
