//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the sub-words of one input line
    ///
    /// `line` is zero-based.
    fn format_line(&mut self, file: &str, line: usize, subwords: &[&str]) -> Result<()>;

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
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per input line, sub-words separated by `|`
    #[default]
    Text,
    /// JSON array of lines with their sub-words
    Json,
    /// Markdown list with sub-words as inline code
    Markdown,
}

impl OutputFormat {
    /// Create the formatter for this format writing to `writer`
    pub fn formatter<'w>(
        self,
        writer: Box<dyn Write + Send + Sync + 'w>,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter + 'w> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}
