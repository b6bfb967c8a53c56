//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordflip_api::Output;

/// Markdown formatter - outputs one fenced block per input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
    input_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
            input_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, source: &str, output: &Output) -> Result<()> {
        self.input_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;

        if self.include_metadata {
            let meta = &output.metadata;
            writeln!(self.writer, "- words: {}", meta.word_count)?;
            writeln!(self.writer, "- characters: {}", meta.total_chars)?;
            writeln!(self.writer, "- scope: {}", meta.scope)?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "```text")?;
        write!(self.writer, "{}", output.text)?;
        if !output.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total inputs: {}*", self.input_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
