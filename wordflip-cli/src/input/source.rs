//! Where the text to reverse comes from

use super::{resolve_patterns, FileReader};
use anyhow::Result;
use std::path::PathBuf;

/// Source of input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Files resolved from glob patterns
    Files(Vec<PathBuf>),
    /// Text given on the command line
    Text(String),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Pick the source from command-line arguments
    pub fn from_args(patterns: &[String], text: Option<&str>) -> Result<Self> {
        match text {
            Some(text) => Ok(InputSource::Text(text.to_string())),
            None if patterns.is_empty() => Ok(InputSource::Stdin),
            None => Ok(InputSource::Files(resolve_patterns(patterns)?)),
        }
    }

    /// Number of inputs this source yields
    pub fn len(&self) -> usize {
        match self {
            InputSource::Files(files) => files.len(),
            InputSource::Text(_) | InputSource::Stdin => 1,
        }
    }

    /// Whether the source yields nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read every input as `(name, text)` pairs, in order
    pub fn read_all(&self) -> impl Iterator<Item = Result<(String, String)>> + '_ {
        let items: Box<dyn Iterator<Item = Result<(String, String)>> + '_> = match self {
            InputSource::Files(files) => Box::new(files.iter().map(|path| -> Result<(String, String)> {
                let text = FileReader::read_text(path)?;
                Ok((path.display().to_string(), text))
            })),
            InputSource::Text(text) => {
                Box::new(std::iter::once(Ok(("<text>".to_string(), text.clone()))))
            }
            InputSource::Stdin => Box::new(std::iter::once_with(|| {
                FileReader::read_stdin().map(|text| ("<stdin>".to_string(), text))
            })),
        };
        items
    }

    /// Get the display name for the input source
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Files(files) => format!("{} file(s)", files.len()),
            InputSource::Text(_) => "command-line text".to_string(),
            InputSource::Stdin => "standard input".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_wins_over_patterns() {
        let source = InputSource::from_args(&["*.txt".to_string()], Some("a b")).unwrap();
        assert_eq!(source, InputSource::Text("a b".to_string()));
    }

    #[test]
    fn test_no_arguments_means_stdin() {
        let source = InputSource::from_args(&[], None).unwrap();
        assert_eq!(source, InputSource::Stdin);
        assert_eq!(source.display_name(), "standard input");
    }

    #[test]
    fn test_read_text_source() {
        let source = InputSource::Text("a,b".to_string());
        let items: Vec<_> = source.read_all().collect::<Result<_>>().unwrap();
        assert_eq!(items, [("<text>".to_string(), "a,b".to_string())]);
        assert_eq!(source.len(), 1);
    }
}
