//! Caret positions and selections

use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

/// A caret location: zero-based line and char column
///
/// Ordered by line first, then column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based line index
    pub line: usize,
    /// Zero-based char column
    pub column: usize,
}

impl Position {
    /// Create a position
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidPosition(s.to_string());
        let (line, column) = s.trim().split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            line: line.trim().parse().map_err(|_| invalid())?,
            column: column.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// How a selection covers text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Contiguous run of text between anchor and active end
    #[default]
    Stream,
    /// Rectangular block spanning the anchor and active lines and columns
    Box,
}

/// A selection with a fixed anchor and a moving active end (the caret)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Where the selection started
    pub anchor: Position,
    /// Where the caret is
    pub active: Position,
}

impl Selection {
    /// Create a selection from anchor to active end
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Empty selection at `position`
    pub const fn collapsed(position: Position) -> Self {
        Self {
            anchor: position,
            active: position,
        }
    }

    /// Whether anchor and active end coincide
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Earlier of the two ends
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// Later of the two ends
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }
}
