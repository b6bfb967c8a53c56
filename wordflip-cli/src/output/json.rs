//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordflip_api::{Metadata, Output};

/// JSON formatter - outputs results as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
    pretty: bool,
    results: Vec<ResultData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultData {
    /// Where the input came from
    pub source: String,
    /// The reversed text
    pub text: String,
    /// Processing metadata, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, include_metadata: bool, pretty: bool) -> Self {
        Self {
            writer,
            include_metadata,
            pretty,
            results: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, output: &Output) -> Result<()> {
        self.results.push(ResultData {
            source: source.to_string(),
            text: output.text.clone(),
            metadata: self.include_metadata.then(|| output.metadata.clone()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.results)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordflip_api::reverse_text;

    fn render(include_metadata: bool) -> Vec<ResultData> {
        let mut buf = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buf, include_metadata, false);
            formatter
                .format_result("one.txt", &reverse_text("a b").unwrap())
                .unwrap();
            formatter
                .format_result("two.txt", &reverse_text("x,y").unwrap())
                .unwrap();
            formatter.finish().unwrap();
        }
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_results_in_order() {
        let results = render(false);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].source, "one.txt");
        assert_eq!(results[0].text, "b a");
        assert_eq!(results[1].text, "y,x");
        assert!(results[0].metadata.is_none());
    }

    #[test]
    fn test_metadata_included() {
        let results = render(true);
        let meta = results[1].metadata.as_ref().unwrap();
        assert_eq!(meta.word_count, 2);
        assert_eq!(meta.separator_runs, 1);
    }
}
