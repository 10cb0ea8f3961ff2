//! Edit command implementation
//!
//! Runs a single sub-word editor command against an in-memory buffer and
//! prints the buffer afterwards. Handy for checking how a configuration
//! behaves across line ends and in box selections.

use crate::config::CliConfig;
use crate::CliResult;
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::io::{self, Write};
use subword_core::SubwordNavigator;
use subword_engine::{
    Action, CommandExecutor, Direction, LineBuffer, Position, Selection, SelectionMode, TextView,
};

/// Arguments for the edit command
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Command to run
    #[arg(value_enum)]
    pub action: ActionArg,

    /// Direction to scan
    #[arg(value_enum)]
    pub direction: DirectionArg,

    /// Buffer contents; lines are separated by newlines
    #[arg(short, long, value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Caret position
    #[arg(long, value_name = "LINE:COLUMN", default_value = "0:0")]
    pub caret: Position,

    /// Selection anchor (default: the caret, no selection)
    #[arg(long, value_name = "LINE:COLUMN")]
    pub anchor: Option<Position>,

    /// Treat the selection as a box
    #[arg(long = "box")]
    pub box_mode: bool,
}

/// Editor command names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    /// Move the caret
    Move,
    /// Extend the selection
    Extend,
    /// Delete to the boundary
    Delete,
}

/// Scan directions accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Towards the end of the text
    Forward,
    /// Towards the start of the text
    Backward,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Move => Action::Move,
            ActionArg::Extend => Action::Extend,
            ActionArg::Delete => Action::Delete,
        }
    }
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Forward => Direction::Forward,
            DirectionArg::Backward => Direction::Backward,
        }
    }
}

impl EditArgs {
    /// Execute the edit command
    pub fn execute(&self, config: &CliConfig) -> CliResult<()> {
        let navigator = SubwordNavigator::new(config.boundaries);
        let buffer = self.run(&navigator)?;
        let stdout = io::stdout();
        write_buffer(&buffer, &mut stdout.lock())
    }

    /// Apply the command and return the resulting buffer
    pub fn run(&self, navigator: &SubwordNavigator) -> CliResult<LineBuffer> {
        let mode = if self.box_mode {
            SelectionMode::Box
        } else {
            SelectionMode::Stream
        };
        let mut buffer = LineBuffer::new(&self.text).with_mode(mode);
        let anchor = self.anchor.unwrap_or(self.caret);
        buffer
            .set_selection(Selection::new(anchor, self.caret))
            .context("Selection does not fit the text")?;

        let executor = CommandExecutor::new(navigator);
        let (action, direction) = (self.action.into(), self.direction.into());
        match executor.execute(&mut buffer, action, direction)? {
            Some(target) => log::info!("{action} {direction} reached {target}"),
            None => log::info!("{action} {direction} had nothing to do"),
        }

        Ok(buffer)
    }
}

/// Print the buffer, a separator, then the caret and any selection anchor
pub fn write_buffer(buffer: &LineBuffer, out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "{}", buffer.text())?;
    writeln!(out, "---")?;
    let selection = buffer.selection();
    writeln!(out, "caret: {}", selection.active)?;
    if !selection.is_empty() {
        writeln!(out, "anchor: {}", selection.anchor)?;
    }
    out.flush()?;
    Ok(())
}
