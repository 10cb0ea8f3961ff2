//! Engine error types

use crate::position::Position;
use thiserror::Error;

/// Errors raised when a command touches text outside the view
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Line index past the last line
    #[error("line {line} out of range (view has {line_count} lines)")]
    LineOutOfRange {
        /// Requested line
        line: usize,
        /// Number of lines in the view
        line_count: usize,
    },

    /// Column past the end of its line
    #[error("column out of range at {position} (line length {length})")]
    ColumnOutOfRange {
        /// Requested position
        position: Position,
        /// Length of the line in chars
        length: usize,
    },

    /// Range whose start lies after its end
    #[error("invalid range {start}..{end}")]
    InvalidRange {
        /// Range start
        start: Position,
        /// Range end
        end: Position,
    },

    /// Position text that is not `line:column`
    #[error("invalid position '{0}', expected LINE:COLUMN")]
    InvalidPosition(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
