//! Sub-word editor commands
//!
//! [`CommandExecutor`] turns an [`Action`] and a [`Direction`] into caret
//! movement, selection extension or deletion on a [`TextView`]. Line
//! crossing happens here; the navigator only ever sees one line.

use crate::error::Result;
use crate::position::{Position, Selection, SelectionMode};
use crate::view::TextView;
use std::fmt;
use subword_core::SubwordNavigator;

/// Undo group name used for box deletions
pub const BOX_DELETE_UNDO_NAME: &str = "Sub-word delete";

/// What a command does with the computed target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the caret, dropping the selection
    Move,
    /// Move the active end, keeping the anchor
    Extend,
    /// Delete up to the target
    Delete,
}

/// Which way a command scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the end of the text
    Forward,
    /// Towards the start of the text
    Backward,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Move => "move",
            Action::Extend => "extend",
            Action::Delete => "delete",
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        })
    }
}

/// Runs sub-word commands against a view
#[derive(Debug, Clone, Copy)]
pub struct CommandExecutor<'n> {
    navigator: &'n SubwordNavigator,
}

impl<'n> CommandExecutor<'n> {
    /// Create an executor that scans with `navigator`
    pub fn new(navigator: &'n SubwordNavigator) -> Self {
        Self { navigator }
    }

    /// Position the command would move to, or `None` when the caret sits at
    /// a document edge and the command has nothing to do
    pub fn target<V: TextView + ?Sized>(
        &self,
        view: &V,
        direction: Direction,
        action: Action,
    ) -> Result<Option<Position>> {
        let caret = view.caret();
        view.check_line(caret.line)?;
        let boxed = view.selection_mode() == SelectionMode::Box;

        let target = match direction {
            Direction::Backward if caret.column == 0 => {
                if boxed {
                    caret
                } else if caret.line == 0 {
                    if action != Action::Delete {
                        return Ok(None);
                    }
                    caret
                } else {
                    let line = caret.line - 1;
                    Position::new(line, view.line_length(line)?)
                }
            }
            Direction::Backward => {
                let text = view.line_text(caret.line)?;
                let column = self.navigator.prev_boundary(&text, caret.column);
                Position::new(caret.line, column)
            }
            Direction::Forward => {
                let text = view.line_text(caret.line)?;
                let chars: Vec<char> = text.chars().collect();

                if caret.column >= chars.len() {
                    if boxed {
                        if action == Action::Extend {
                            Position::new(caret.line, caret.column + 1)
                        } else {
                            caret
                        }
                    } else if caret.line + 1 >= view.line_count() {
                        if action != Action::Delete {
                            return Ok(None);
                        }
                        caret
                    } else {
                        Position::new(caret.line + 1, 0)
                    }
                } else {
                    let column = self.navigator.next_boundary_in(&chars, caret.column);
                    Position::new(caret.line, column)
                }
            }
        };

        Ok(Some(target))
    }

    /// Apply one command to `view`
    ///
    /// Returns the target position, or `None` if the view was left alone.
    pub fn execute<V: TextView + ?Sized>(
        &self,
        view: &mut V,
        action: Action,
        direction: Direction,
    ) -> Result<Option<Position>> {
        let Some(target) = self.target(view, direction, action)? else {
            log::debug!("{action} {direction}: caret at document edge, nothing to do");
            return Ok(None);
        };
        log::debug!("{action} {direction}: {} -> {target}", view.caret());

        match action {
            Action::Move => view.set_caret(target)?,
            Action::Extend => {
                let anchor = view.selection().anchor;
                view.set_selection(Selection::new(anchor, target))?;
            }
            Action::Delete => match view.selection_mode() {
                SelectionMode::Stream => delete_stream(view, target)?,
                SelectionMode::Box => delete_box(view, target)?,
            },
        }

        Ok(Some(target))
    }
}

/// Delete from the selection (widened to include `target`)
fn delete_stream<V: TextView + ?Sized>(view: &mut V, target: Position) -> Result<()> {
    let selection = view.selection();
    let start = selection.start().min(target);
    let end = selection.end().max(target);

    view.delete(start, end)?;
    view.set_caret(start)
}

/// Delete the column band spanned by the box and `target` on every box line
fn delete_box<V: TextView + ?Sized>(view: &mut V, target: Position) -> Result<()> {
    let Selection { anchor, active } = view.selection();
    let first_line = anchor.line.min(active.line);
    let last_line = anchor.line.max(active.line);
    let start_column = anchor.column.min(active.column).min(target.column);
    let end_column = anchor.column.max(active.column).max(target.column);

    let opened = !view.is_undo_open();
    if opened {
        view.begin_undo(BOX_DELETE_UNDO_NAME);
    }

    // The group opened here is closed even if a line fails to delete
    let result = delete_band(view, first_line..=last_line, start_column, end_column);
    let result = result.and_then(|()| {
        view.set_selection(Selection::new(
            Position::new(anchor.line, start_column),
            Position::new(active.line, start_column),
        ))
    });

    if opened {
        view.end_undo();
    }
    result
}

fn delete_band<V: TextView + ?Sized>(
    view: &mut V,
    lines: std::ops::RangeInclusive<usize>,
    start_column: usize,
    end_column: usize,
) -> Result<()> {
    for line in lines {
        let end = end_column.min(view.line_length(line)?);
        if end > start_column {
            view.delete(Position::new(line, start_column), Position::new(line, end))?;
        }
    }
    Ok(())
}
