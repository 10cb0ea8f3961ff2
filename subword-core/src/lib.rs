//! Sub-word boundary detection for caret navigation
//!
//! This crate finds the positions inside a line where a caret should stop
//! when moving by word part instead of by whole token, so that
//! `MyHTTPClient` is visited as `My`, `HTTP`, `Client`.
//!
//! # Architecture
//!
//! - **Classification**: every character maps to one of a few [`CharClass`]es
//! - **Table**: a [`TransitionTable`] answers "is there a boundary here" for
//!   each `(prev, cur, next)` class triple
//! - **Building**: [`TableBuilder`] compiles [`BoundaryOptions`] into a table
//! - **Scanning**: [`BoundaryScanner`] walks a line probing the table once per
//!   character
//! - **Navigation**: [`SubwordNavigator`] publishes the current table and is
//!   what a host editor talks to
//!
//! # Example
//!
//! ```rust
//! use subword_core::{BoundaryOptions, SubwordNavigator};
//!
//! let navigator = SubwordNavigator::new(BoundaryOptions::default());
//!
//! assert_eq!(navigator.next_boundary("HTTPClient", 0), 4);
//! assert_eq!(navigator.prev_boundary("HTTPClient", 10), 4);
//! assert_eq!(navigator.split("getHTTPResponse"), ["get", "HTTP", "Response"]);
//! ```

pub mod builder;
pub mod char_class;
pub mod error;
pub mod navigator;
pub mod options;
pub mod scanner;
pub mod table;

pub use builder::TableBuilder;
pub use char_class::{classify, CharClass, CharClassifier, StandardClassifier};
pub use error::{ConfigError, Result};
pub use navigator::SubwordNavigator;
pub use options::{
    BoundaryOptions, BoundaryOptionsBuilder, SkipConnectedBrackets, SkipConnectedOperators,
    SkipConnectedUnderscores, SkipConnectedWhitespace,
};
pub use scanner::{BoundaryScanner, Segments};
pub use table::TransitionTable;
