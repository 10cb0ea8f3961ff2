//! Editor command layer for sub-word navigation
//!
//! This crate drives a [`SubwordNavigator`] from an editor's point of view:
//! it reads the caret line from a [`TextView`], crosses line ends, and
//! applies moves, selection extensions and deletions, including box
//! selections.
//!
//! ```
//! use subword_engine::{Action, CommandExecutor, Direction, LineBuffer, Position, TextView};
//! use subword_engine::SubwordNavigator;
//!
//! let navigator = SubwordNavigator::default();
//! let executor = CommandExecutor::new(&navigator);
//! let mut buffer = LineBuffer::new("HTTPClient");
//!
//! executor.execute(&mut buffer, Action::Delete, Direction::Forward).unwrap();
//! assert_eq!(buffer.text(), "Client");
//! assert_eq!(buffer.caret(), Position::new(0, 0));
//! ```

#![warn(missing_docs)]

pub mod buffer;
pub mod error;
pub mod executor;
pub mod position;
pub mod view;

// Re-export key types
pub use buffer::LineBuffer;
pub use error::{EngineError, Result};
pub use executor::{Action, CommandExecutor, Direction, BOX_DELETE_UNDO_NAME};
pub use position::{Position, Selection, SelectionMode};
pub use view::TextView;

// Re-export from core for convenience
pub use subword_core::{BoundaryOptions, SubwordNavigator};
