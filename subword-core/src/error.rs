//! Error types for option loading
//!
//! Scanning itself never fails; only reading and editing option sets can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, saving or overriding boundary options
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Options file could not be read or written
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// TOML document did not match the options schema
    #[error("invalid options file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Options could not be rendered as TOML
    #[error("failed to serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Override named an option that does not exist
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// Override carried a value the option does not accept
    #[error("invalid value '{value}' for option '{option}'")]
    InvalidValue {
        /// Option name
        option: String,
        /// Rejected value
        value: String,
    },
}

/// Result type for option handling
pub type Result<T> = std::result::Result<T, ConfigError>;
