//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs each file as a section and each non-empty
/// line as a list item of inline-code sub-words
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    current_file: Option<String>,
    subword_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_file: None,
            subword_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_line(&mut self, file: &str, line: usize, subwords: &[&str]) -> Result<()> {
        if self.current_file.as_deref() != Some(file) {
            if self.current_file.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {file}")?;
            writeln!(self.writer)?;
            self.current_file = Some(file.to_string());
        }

        if subwords.is_empty() {
            return Ok(());
        }

        self.subword_count += subwords.len();
        let items: Vec<String> = subwords.iter().map(|s| format!("`{s}`")).collect();
        writeln!(self.writer, "- {}: {}", line + 1, items.join(" "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sub-words: {}*", self.subword_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
