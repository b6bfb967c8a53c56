//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordflip_api::Output;

/// Plain text formatter - outputs the reversed text unchanged
pub struct TextFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, source: &str, output: &Output) -> Result<()> {
        if self.include_metadata {
            let meta = &output.metadata;
            writeln!(
                self.writer,
                "# {source}: {} words, {} chars, scope {}",
                meta.word_count, meta.total_chars, meta.scope
            )?;
        }

        // Keep the text byte-for-byte; only terminate the last line
        if output.text.ends_with('\n') {
            write!(self.writer, "{}", output.text)?;
        } else {
            writeln!(self.writer, "{}", output.text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
