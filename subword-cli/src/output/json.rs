//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// Input file the line came from
    pub file: String,
    /// Zero-based line number
    pub line: usize,
    /// Sub-words of the line, in order
    pub subwords: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            lines: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, file: &str, line: usize, subwords: &[&str]) -> Result<()> {
        self.lines.push(LineData {
            file: file.to_string(),
            line,
            subwords: subwords.iter().map(|s| s.to_string()).collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.lines)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
