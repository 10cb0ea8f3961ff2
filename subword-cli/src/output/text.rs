//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Separator written between sub-words
pub const SEPARATOR: &str = "|";

/// Plain text formatter - outputs one line per input line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, _file: &str, _line: usize, subwords: &[&str]) -> Result<()> {
        writeln!(self.writer, "{}", subwords.join(SEPARATOR))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter
            .format_line("a.rs", 0, &["get", "HTTP", "Response"])
            .unwrap();
        formatter.format_line("a.rs", 1, &[]).unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "get|HTTP|Response\n\n");
    }
}
