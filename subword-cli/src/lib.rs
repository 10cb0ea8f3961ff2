//! Subword CLI library
//!
//! This library provides the command-line interface for sub-word boundary
//! navigation: splitting files into sub-words, querying single boundaries,
//! inspecting the transition table and running editor commands.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
