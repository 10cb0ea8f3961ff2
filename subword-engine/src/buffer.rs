//! In-memory [`TextView`] implementation

use crate::error::{EngineError, Result};
use crate::position::{Position, Selection, SelectionMode};
use crate::view::TextView;
use std::borrow::Cow;

/// Lines of text with a selection and undo bookkeeping
///
/// Columns past the end of a line are allowed in selections (box mode can
/// extend into virtual space) but not in deletions.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
    selection: Selection,
    mode: SelectionMode,
    open_undo: Vec<String>,
    closed_undo: Vec<String>,
}

impl LineBuffer {
    /// Create a buffer from text; `\n` and `\r\n` separate lines
    pub fn new(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self {
            lines,
            ..Self::default()
        }
    }

    /// Set the selection mode
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the initial selection
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Full text with `\n` line breaks
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// All lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Names of completed undo groups, oldest first
    pub fn undo_history(&self) -> &[String] {
        &self.closed_undo
    }

    /// Byte offset of `column` within `line`
    fn byte_offset(&self, position: Position) -> Result<usize> {
        self.check_line(position.line)?;
        let line = &self.lines[position.line];
        if position.column == 0 {
            return Ok(0);
        }
        match line.char_indices().nth(position.column) {
            Some((offset, _)) => Ok(offset),
            None => {
                let length = line.chars().count();
                if position.column == length {
                    Ok(line.len())
                } else {
                    Err(EngineError::ColumnOutOfRange { position, length })
                }
            }
        }
    }
}

impl TextView for LineBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> Result<Cow<'_, str>> {
        self.check_line(line)?;
        Ok(Cow::Borrowed(self.lines[line].as_str()))
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) -> Result<()> {
        self.check_line(selection.anchor.line)?;
        self.check_line(selection.active.line)?;
        self.selection = selection;
        Ok(())
    }

    fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    fn delete(&mut self, start: Position, end: Position) -> Result<()> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        let start_byte = self.byte_offset(start)?;
        let end_byte = self.byte_offset(end)?;

        if start.line == end.line {
            self.lines[start.line].replace_range(start_byte..end_byte, "");
        } else {
            let tail = self.lines[end.line][end_byte..].to_string();
            let head = &mut self.lines[start.line];
            head.truncate(start_byte);
            head.push_str(&tail);
            self.lines.drain(start.line + 1..=end.line);
        }

        log::trace!("deleted {start}..{end}");
        self.selection = Selection::collapsed(start);
        Ok(())
    }

    fn is_undo_open(&self) -> bool {
        !self.open_undo.is_empty()
    }

    fn begin_undo(&mut self, name: &str) {
        self.open_undo.push(name.to_string());
    }

    fn end_undo(&mut self) {
        if let Some(name) = self.open_undo.pop() {
            self.closed_undo.push(name);
        }
    }
}
