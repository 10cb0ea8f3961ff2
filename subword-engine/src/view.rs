//! Host editor abstraction
//!
//! A [`TextView`] is everything the command layer needs from an editor: line
//! access, caret and selection state, range deletion and undo grouping.

use crate::error::{EngineError, Result};
use crate::position::{Position, Selection, SelectionMode};
use std::borrow::Cow;

/// Editor surface driven by sub-word commands
pub trait TextView {
    /// Number of lines, always at least one
    fn line_count(&self) -> usize;

    /// Text of `line` without its line break
    fn line_text(&self, line: usize) -> Result<Cow<'_, str>>;

    /// Length of `line` in chars
    fn line_length(&self, line: usize) -> Result<usize> {
        Ok(self.line_text(line)?.chars().count())
    }

    /// Current selection; the active end is the caret
    fn selection(&self) -> Selection;

    /// Replace the selection
    fn set_selection(&mut self, selection: Selection) -> Result<()>;

    /// How the selection covers text
    fn selection_mode(&self) -> SelectionMode;

    /// Remove the text between `start` and `end`
    fn delete(&mut self, start: Position, end: Position) -> Result<()>;

    /// Whether an undo group is currently open
    fn is_undo_open(&self) -> bool;

    /// Open an undo group; edits until [`end_undo`](Self::end_undo) undo as one
    fn begin_undo(&mut self, name: &str);

    /// Close the innermost undo group
    fn end_undo(&mut self);

    /// Caret position
    fn caret(&self) -> Position {
        self.selection().active
    }

    /// Move the caret, dropping any selection
    fn set_caret(&mut self, position: Position) -> Result<()> {
        self.set_selection(Selection::collapsed(position))
    }

    /// Fail unless `line` exists
    fn check_line(&self, line: usize) -> Result<()> {
        let line_count = self.line_count();
        if line < line_count {
            Ok(())
        } else {
            Err(EngineError::LineOutOfRange { line, line_count })
        }
    }
}
